//! Built-in jewelry catalog.
//!
//! Used when no catalog file is configured, and as fixture data in tests.

use rust_decimal::Decimal;

use super::{Category, Product};
use crate::types::{CategoryId, ProductId};

const IMAGE_BASE: &str = "https://images.unsplash.com/";

/// Navigation categories, in display order.
#[must_use]
pub fn categories() -> Vec<Category> {
    vec![
        Category::new("necklaces", "Necklaces"),
        Category::new("earrings", "Earrings"),
        Category::new("bracelets", "Bracelets"),
        Category::new("rings", "Rings"),
        Category::new("anklets", "Anklets"),
        Category::new("mangalsutras", "Mangalsutras"),
        Category::new("nosepins", "Nose Pins"),
    ]
}

/// The seed products.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            is_trending: true,
            ..piece(Piece {
                id: "1",
                name: "Royal Rajasthani Kundan Necklace",
                category: "necklaces",
                subcategory: "kundan",
                price: 12_999,
                description: "This exquisite Kundan necklace is handcrafted using traditional \
                    Rajasthani techniques. The design features intricate gold work with embedded \
                    precious stones, perfect for weddings and special occasions.",
                features: &[
                    "Handcrafted",
                    "22K gold plated",
                    "Semi-precious stones",
                    "Kundan work",
                ],
                images: &["photo-1611085583191-a3b181a88558", "photo-1601821765780-754fa98637c1"],
                rating: 4.8,
                stock: 15,
            })
        },
        piece(Piece {
            id: "2",
            name: "Classic Diamond Studs",
            category: "earrings",
            subcategory: "diamond",
            price: 8999,
            description: "Timeless diamond stud earrings set in 18K white gold. These versatile \
                earrings add elegance to any outfit, day or night.",
            features: &["18K white gold", "VVS clarity diamonds", "Secure screw backs"],
            images: &["photo-1574105760595-99347b0999fc", "photo-1535556116002-6281ff3e9f36"],
            rating: 4.9,
            stock: 25,
        }),
        Product {
            is_new: true,
            ..piece(Piece {
                id: "3",
                name: "Temple Gold Jhumkas",
                category: "earrings",
                subcategory: "jhumka",
                price: 6999,
                description: "Traditional South Indian temple-style jhumkas with intricate \
                    craftsmanship. These statement earrings feature delicate temple motifs with \
                    hanging pearl accents.",
                features: &["Temple design", "Gold plated", "Pearl accents", "Lightweight"],
                images: &["photo-1588444650733-d2624a5214ea", "photo-1575863438355-d74dd18fd3e4"],
                rating: 4.7,
                stock: 18,
            })
        },
        Product {
            is_trending: true,
            ..piece(Piece {
                id: "4",
                name: "Emerald Cut Diamond Ring",
                category: "rings",
                subcategory: "diamond",
                price: 15_999,
                description: "An elegant emerald-cut diamond ring set in platinum. The minimalist \
                    design places focus on the stunning center stone, creating a sophisticated \
                    and timeless piece.",
                features: &[
                    "Platinum band",
                    "Emerald cut diamond",
                    "Side accent stones",
                    "Custom sizing available",
                ],
                images: &["photo-1605100804763-247f67b3557e", "photo-1599643478518-a784e5dc4c8f"],
                rating: 4.9,
                stock: 10,
            })
        },
        piece(Piece {
            id: "5",
            name: "Ruby and Gold Bangles Set",
            category: "bracelets",
            subcategory: "bangles",
            price: 9999,
            description: "A set of six intricately designed gold-plated bangles with ruby \
                accents. Perfect for special occasions and traditional wear.",
            features: &["Set of 6", "Gold-plated brass", "Ruby accents", "Adjustable size"],
            images: &["photo-1611591437281-460bfbe1220a", "photo-1608050072262-7b26ba63fb46"],
            rating: 4.6,
            stock: 20,
        }),
        Product {
            is_trending: true,
            ..piece(Piece {
                id: "6",
                name: "Traditional Polki Choker",
                category: "necklaces",
                subcategory: "choker",
                price: 19_999,
                description: "A luxurious polki choker necklace featuring uncut diamonds set in \
                    22K gold. This piece represents the finest of Indian craftsmanship, perfect \
                    for bridal wear.",
                features: &[
                    "22K gold",
                    "Uncut diamonds",
                    "Ruby and emerald accents",
                    "Adjustable chain",
                ],
                images: &["photo-1602173574767-37ac01994b2a", "photo-1599643477877-530eb83abc8e"],
                rating: 4.9,
                stock: 5,
            })
        },
        Product {
            is_new: true,
            ..piece(Piece {
                id: "7",
                name: "Pearl and Gold Mangalsutra",
                category: "mangalsutras",
                subcategory: "traditional",
                price: 7999,
                description: "An elegant mangalsutra featuring freshwater pearls and a gold \
                    pendant. This modern take on the traditional symbol combines elegance with \
                    cultural significance.",
                features: &[
                    "Freshwater pearls",
                    "18K gold pendant",
                    "Adjustable black cord",
                    "Lightweight design",
                ],
                images: &["photo-1611241893603-3c359704e0ee", "photo-1599643478518-a784e5dc4c8f"],
                rating: 4.8,
                stock: 15,
            })
        },
        piece(Piece {
            id: "8",
            name: "Silver Payal with Bells",
            category: "anklets",
            subcategory: "payal",
            price: 2999,
            description: "Traditional silver anklets with tiny bells that create a pleasant \
                tinkling sound with movement. Handcrafted with intricate designs.",
            features: &["Pure silver", "Tiny bells", "Adjustable size", "Traditional motifs"],
            images: &["photo-1602751584552-8ba73aad10e1", "photo-1599643477414-63f6b5c0abcf"],
            rating: 4.5,
            stock: 30,
        }),
    ]
}

struct Piece {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    subcategory: &'static str,
    price: i64,
    description: &'static str,
    features: &'static [&'static str],
    images: &'static [&'static str],
    rating: f64,
    stock: u32,
}

fn piece(p: Piece) -> Product {
    Product {
        id: ProductId::new(p.id),
        name: p.name.to_owned(),
        category: CategoryId::new(p.category),
        subcategory: p.subcategory.to_owned(),
        price: Decimal::from(p.price),
        discount_price: None,
        description: p.description.to_owned(),
        features: p.features.iter().map(|f| (*f).to_owned()).collect(),
        images: p
            .images
            .iter()
            .map(|path| format!("{IMAGE_BASE}{path}"))
            .collect(),
        rating: p.rating,
        stock: p.stock,
        is_new: false,
        is_trending: false,
    }
}
