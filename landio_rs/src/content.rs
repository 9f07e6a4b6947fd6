//! Built-in LANDIO landing page content.

use landio_blocks::types::{
    Align, BlockDescriptor, ContentSectionBlock, ContentVariant, CtaBlock, FooterBlock, HeroBlock,
    Orientation, PageModel, PricingBlock, PricingPlan, SectionTitleBlock,
};

const SIGN_UP_LINK: &str = "/post-a-property";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn content_section(
    variant: ContentVariant,
    title: &str,
    description: &str,
    image_url: &str,
    orientation: Orientation,
) -> ContentSectionBlock {
    ContentSectionBlock {
        variant,
        title: title.into(),
        description: description.into(),
        image_url: image_url.into(),
        orientation,
        ..Default::default()
    }
}

fn pricing() -> PricingBlock {
    PricingBlock {
        title: "Pricing".into(),
        subtitle: Some("Choose the package that fits your inventory.".into()),
        plans: vec![
            PricingPlan {
                name: "INDIVIDUAL".into(),
                price: "$497".into(),
                period: Some("1 PROPERTY".into()),
                description: None,
                features: strings(&[
                    "1 Property Listing",
                    "Unlimited Photos",
                    "Direct Buyer Leads",
                ]),
                cta_text: "GET STARTED".into(),
                cta_link: SIGN_UP_LINK.into(),
                highlight: false,
            },
            PricingPlan {
                name: "10-PACK".into(),
                price: "$397".into(),
                period: Some("PER PROPERTY".into()),
                description: Some("$3,997 Total (20% Savings)".into()),
                features: strings(&[
                    "10 Property Listings",
                    "20% Cost Savings",
                    "Never Expires",
                    "Priority Support",
                ]),
                cta_text: "GET STARTED".into(),
                cta_link: "/post-a-property?package=10pack".into(),
                highlight: true,
            },
            PricingPlan {
                name: "ENTERPRISE".into(),
                price: "LET'S TALK".into(),
                period: Some("TO SALES".into()),
                description: Some("For Brokerages, Teams & Developers".into()),
                features: strings(&["Custom Services"]),
                cta_text: "TALK TO SALES".into(),
                cta_link: "/schedule-call".into(),
                highlight: false,
            },
        ],
    }
}

/// The LANDIO marketing page.
pub fn default_page() -> PageModel {
    let built_for_land = ContentSectionBlock {
        image_alt: Some("Rolling hills landscape".into()),
        ..content_section(
            ContentVariant::Featured,
            "BUILT FOR LAND",
            "LANDIO is built by experienced land investors, designers, and marketers who understand the nuances of land, acreage, and rural property markets.",
            "/images/ux-rollingHills.jpg",
            Orientation::Left,
        )
    };
    let property_page = ContentSectionBlock {
        image_alt: Some("Modern luxury home interior".into()),
        image_bleed: 3.0,
        ..content_section(
            ContentVariant::Featured,
            "DEDICATED LANDIO PROPERTY PAGE",
            "Every property gets its own page designed to convert serious buyers. High-resolution imagery, detailed maps, and clear calls to action.",
            "/images/landio-page.png",
            Orientation::Right,
        )
    };
    let own_the_leads = ContentSectionBlock {
        image_position_y: "60%".into(),
        ..content_section(
            ContentVariant::Parallax,
            "YOU OWN THE LEADS",
            "All inquiries go directly to you. No lead resale. No middlemen. You control the relationship from start to finish, maximizing your conversion rates and building your own buyer list.",
            "/images/ux-leads.png",
            Orientation::Right,
        )
    };
    let social = ContentSectionBlock {
        image_alt: Some("Social media apps on smartphone".into()),
        ..content_section(
            ContentVariant::Featured,
            "STRATEGIC SOCIAL MEDIA EXPOSURE",
            "LANDIO has built a large and engaged social media following across Instagram, Facebook, YouTube, and TikTok. Our audience includes a diverse mix of land buyers, investors, entrepreneurs, and public figures drawn to land, nature, and legacy.",
            "/images/ux-social.png",
            Orientation::Left,
        )
    };

    PageModel::new(
        "LANDIO",
        "Flat-fee property marketing. No commissions. You own the leads.",
        vec![
            BlockDescriptor::new(
                "hero-1",
                HeroBlock {
                    title: "GET YOUR PROPERTIES ON THE MAP".into(),
                    subtitle: Some("Feature Them On".into()),
                    description: Some(
                        "Flat-fee property marketing.\nNo commissions. You own the leads.".into(),
                    ),
                    cta_text: Some("Start Selling".into()),
                    cta_link: Some(SIGN_UP_LINK.into()),
                    logo_url: Some("/LANDIO-Logo.svg".into()),
                    logo_alt: Some("LANDIO".into()),
                    background_url: Some(
                        "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?q=80&w=2070&auto=format&fit=crop".into(),
                    ),
                },
            ),
            BlockDescriptor::new("pricing-1", pricing()),
            BlockDescriptor::new(
                "section-title-1",
                SectionTitleBlock {
                    title: "WHY LANDIO?".into(),
                    subtitle: None,
                    align: Align::Center,
                },
            ),
            BlockDescriptor::new("content-section-1", built_for_land),
            BlockDescriptor::new(
                "content-section-2",
                content_section(
                    ContentVariant::Parallax,
                    "COMPREHENSIVE PROPERTY MAP",
                    "Put your property in front of a global audience of buyers seeking land across all sizes, types, and price ranges. Our comprehensive property map ensures your listing gets seen by the right eyes.",
                    "/images/landio-map.jpg",
                    Orientation::Left,
                ),
            ),
            BlockDescriptor::new("content-section-3", property_page),
            BlockDescriptor::new("content-section-4", own_the_leads),
            BlockDescriptor::new("content-section-5", social),
            BlockDescriptor::new(
                "content-section-6",
                content_section(
                    ContentVariant::Parallax,
                    "LIQUIDITY IN AN ILLIQUID MARKET",
                    "Land has traditionally been one of the hardest assets to sell. We're changing that. By streamlining the marketing process and connecting you directly with qualified buyers, we turn stagnant inventory into capital you can reinvest.",
                    "/images/ux-map.png",
                    Orientation::Left,
                ),
            ),
            BlockDescriptor::new(
                "cta-1",
                CtaBlock {
                    title: "Ready to Sell More Land?".into(),
                    description: "LANDIO is a marketing platform, not a brokerage. You retain full control of pricing, negotiations, relationships, and closing.".into(),
                    button_text: "GET STARTED NOW".into(),
                    button_link: SIGN_UP_LINK.into(),
                },
            ),
            BlockDescriptor::new(
                "footer-1",
                FooterBlock {
                    copyright: "© 2024 LANDIO. All rights reserved.".into(),
                },
            ),
        ],
    )
}
