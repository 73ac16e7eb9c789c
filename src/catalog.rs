//! Built-in catalog data.
//!
//! The showcase catalog the storefront ships with: six products served
//! directly in demo mode (with `demo<N>` pseudo-identifiers), the first three
//! of which double as the starter set inserted by `/seed`. Detail overlays are
//! registered per slug; slugs without one render as the bare product.

use crate::models::{Faq, Product, ProductDetail, ProductVariant, SpecEntry};

fn variant(name: &str, options: &[&str]) -> ProductVariant {
    ProductVariant {
        name: name.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The fixed demo catalog, in display order. Stable across calls.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: Some("demo1".to_string()),
            title: "3D Printed Diamond Cut LED Frame".to_string(),
            slug: "3d-printed-diamond-cut-led-frame".to_string(),
            description: Some(
                "A premium 3D printed LED frame with diamond-cut edges that glows softly, \
                 turning your photos into luminous art."
                    .to_string(),
            ),
            price: 2499.0,
            discount_percent: 20,
            rating: 4.9,
            images: strings(&[
                "https://images.unsplash.com/photo-1542038784456-1ea8e935640e?q=80&w=1200&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1600347020011-8b88c43eaecf?q=80&w=1200&auto=format&fit=crop",
            ]),
            badges: strings(&["Best Seller", "Handmade"]),
            variants: vec![
                variant("Size", &["Small", "Medium", "Large"]),
                variant("Light Color", &["Warm", "Cool", "RGB"]),
            ],
            featured: true,
            category: "frames".to_string(),
        },
        Product {
            id: Some("demo2".to_string()),
            title: "Personalized Wooden Photo Frame with LED".to_string(),
            slug: "personalized-wooden-led-frame".to_string(),
            description: Some(
                "Elegant wooden frame with embedded warm LEDs, personalized with name and message."
                    .to_string(),
            ),
            price: 1999.0,
            discount_percent: 15,
            rating: 4.8,
            images: strings(&[
                "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=1200&auto=format&fit=crop",
            ]),
            badges: strings(&["Free Personalization"]),
            variants: vec![
                variant("Size", &["8x8", "10x10", "12x12"]),
                variant("Light Color", &["Warm", "Cool"]),
            ],
            featured: true,
            category: "frames".to_string(),
        },
        Product {
            id: Some("demo3".to_string()),
            title: "Crystal Acrylic Night Lamp".to_string(),
            slug: "crystal-acrylic-night-lamp".to_string(),
            description: Some(
                "Acrylic panel etched with your photo and message, illuminated by soft LEDs."
                    .to_string(),
            ),
            price: 1599.0,
            discount_percent: 10,
            rating: 4.7,
            images: strings(&[
                "https://images.unsplash.com/photo-1501785888041-af3ef285b470?q=80&w=1200&auto=format&fit=crop",
            ]),
            badges: strings(&["New"]),
            variants: vec![variant("Size", &["Small", "Medium"])],
            featured: false,
            category: "lamps".to_string(),
        },
        Product {
            id: Some("demo4".to_string()),
            title: "Custom Name LED Neon Sign".to_string(),
            slug: "custom-name-neon-sign".to_string(),
            description: Some(
                "Your name or phrase bent in soft neon-flex, mounted on a clear acrylic backing."
                    .to_string(),
            ),
            price: 2999.0,
            discount_percent: 25,
            rating: 4.8,
            images: strings(&[
                "https://images.unsplash.com/photo-1563089145-599997674d42?q=80&w=1200&auto=format&fit=crop",
            ]),
            badges: strings(&["Trending"]),
            variants: vec![
                variant("Size", &["60cm", "90cm", "120cm"]),
                variant("Light Color", &["Warm White", "Pink", "Ice Blue"]),
            ],
            featured: true,
            category: "neon".to_string(),
        },
        Product {
            id: Some("demo5".to_string()),
            title: "Engraved Rotating Crystal Cube".to_string(),
            slug: "engraved-rotating-crystal-cube".to_string(),
            description: Some(
                "A laser-engraved K9 crystal cube on a rotating LED base, carrying your photo in 3D."
                    .to_string(),
            ),
            price: 1899.0,
            discount_percent: 10,
            rating: 4.6,
            images: strings(&[
                "https://images.unsplash.com/photo-1515940175183-6798529cb860?q=80&w=1200&auto=format&fit=crop",
            ]),
            badges: strings(&["Gift Pick"]),
            variants: vec![variant("Base", &["Wooden", "LED Rotating"])],
            featured: false,
            category: "lamps".to_string(),
        },
        Product {
            id: Some("demo6".to_string()),
            title: "Magic Mirror Photo Frame".to_string(),
            slug: "magic-mirror-photo-frame".to_string(),
            description: Some(
                "Looks like a mirror until the LEDs switch on and reveal your hidden photo."
                    .to_string(),
            ),
            price: 2199.0,
            discount_percent: 15,
            rating: 4.7,
            images: strings(&[
                "https://images.unsplash.com/photo-1513519245088-0e12902e5a38?q=80&w=1200&auto=format&fit=crop",
            ]),
            badges: strings(&["Premium"]),
            variants: vec![
                variant("Size", &["8x10", "11x14"]),
                variant("Light Color", &["Warm", "Cool"]),
            ],
            featured: false,
            category: "frames".to_string(),
        },
    ]
}

/// Starter records inserted by `/seed`: the first three showcase products,
/// without pseudo-identifiers (the store assigns real ones on insert).
pub fn starter_products() -> Vec<Product> {
    demo_products()
        .into_iter()
        .take(3)
        .map(|p| Product { id: None, ..p })
        .collect()
}

/// Detail overlay for a slug, if one is registered.
pub fn detail_for(slug: &str) -> Option<ProductDetail> {
    let detail = match slug {
        "3d-printed-diamond-cut-led-frame" => ProductDetail {
            features: strings(&[
                "Diamond-cut edges that refract the LED glow",
                "Photo printed on premium matte board",
                "USB powered with inline switch",
            ]),
            specs: vec![
                spec("Material", "PLA+ 3D print, acrylic front"),
                spec("Power", "5V USB, 1m cable"),
                spec("Print", "300 DPI matte photo print"),
            ],
            whats_in_box: strings(&["LED frame", "USB cable", "Mounting hook"]),
            care: strings(&["Wipe with a dry cloth", "Keep away from direct sunlight"]),
            faqs: vec![
                faq(
                    "Can I use any photo?",
                    "Yes, upload any portrait or landscape photo at checkout; we crop it to fit.",
                ),
                faq("How long does delivery take?", "5-7 working days across India."),
            ],
            shipping: "Ships in 2-3 days, delivered in 5-7 working days.".to_string(),
            how_to_order: strings(&[
                "Pick a size and light color",
                "Upload your photo at checkout",
                "We print, assemble and ship",
            ]),
        },
        "personalized-wooden-led-frame" => ProductDetail {
            features: strings(&[
                "Solid sheesham wood border",
                "Name and message engraved below the photo",
                "Warm backlight with touch dimmer",
            ]),
            specs: vec![
                spec("Material", "Sheesham wood, acrylic"),
                spec("Power", "5V USB"),
            ],
            whats_in_box: strings(&["Wooden frame", "USB cable"]),
            care: strings(&["Dust with a soft cloth", "Do not use solvents"]),
            faqs: vec![faq(
                "Can the engraving be in Hindi?",
                "Yes, we support Hindi and English engraving text.",
            )],
            shipping: "Ships in 3-4 days, delivered in 6-8 working days.".to_string(),
            how_to_order: strings(&[
                "Choose a size",
                "Add the name and message to engrave",
                "Upload your photo at checkout",
            ]),
        },
        "crystal-acrylic-night-lamp" => ProductDetail {
            features: strings(&[
                "Photo and message etched into clear acrylic",
                "Soft warm glow suitable as a night lamp",
            ]),
            specs: vec![
                spec("Material", "5mm clear acrylic, wooden base"),
                spec("Power", "5V USB, optional battery base"),
            ],
            whats_in_box: strings(&["Etched acrylic panel", "LED base", "USB cable"]),
            care: strings(&["Clean with a microfiber cloth"]),
            faqs: vec![faq(
                "Does it work on batteries?",
                "The standard base is USB powered; a 3xAA battery base is available on request.",
            )],
            shipping: "Ships in 2-3 days, delivered in 5-7 working days.".to_string(),
            how_to_order: strings(&[
                "Pick a size",
                "Upload the photo to etch",
                "Add an optional message line",
            ]),
        },
        "custom-name-neon-sign" => ProductDetail {
            features: strings(&[
                "Hand-bent neon-flex on clear acrylic",
                "Dimmer and remote included",
                "Safe low-voltage supply",
            ]),
            specs: vec![
                spec("Material", "Neon-flex LED, 8mm acrylic"),
                spec("Power", "12V adapter, included"),
            ],
            whats_in_box: strings(&["Neon sign", "12V adapter", "Remote dimmer", "Hanging kit"]),
            care: strings(&["Indoor use only", "Wipe gently with a dry cloth"]),
            faqs: vec![faq(
                "Can I pick a custom font?",
                "Yes, choose from 12 fonts or send us your own artwork.",
            )],
            shipping: "Made to order; ships in 5-6 days.".to_string(),
            how_to_order: strings(&[
                "Send the name or phrase",
                "Pick a font and light color",
                "Approve the preview we send you",
            ]),
        },
        _ => return None,
    };
    Some(detail)
}

fn spec(label: &str, value: &str) -> SpecEntry {
    SpecEntry { label: label.to_string(), value: value.to_string() }
}

fn faq(question: &str, answer: &str) -> Faq {
    Faq { question: question.to_string(), answer: answer.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn demo_catalog_is_fixed_and_well_formed() {
        let products = demo_products();
        assert_eq!(products.len(), 6);
        for (i, p) in products.iter().enumerate() {
            assert_eq!(p.id.as_deref(), Some(format!("demo{}", i + 1).as_str()));
            p.validate().unwrap();
        }
        let slugs: std::collections::HashSet<_> =
            products.iter().map(|p| p.slug.clone()).collect();
        assert_eq!(slugs.len(), 6, "slugs must be unique");
    }

    #[test]
    fn starter_set_is_first_three_without_ids() {
        let starter = starter_products();
        assert_eq!(starter.len(), 3);
        assert!(starter.iter().all(|p| p.id.is_none()));
        assert_eq!(starter[2].slug, "crystal-acrylic-night-lamp");
    }

    #[test]
    fn overlays_cover_some_slugs_only() {
        assert!(detail_for("crystal-acrylic-night-lamp").is_some());
        assert!(detail_for("magic-mirror-photo-frame").is_none());
        assert!(detail_for("nonexistent-slug").is_none());
    }
}
