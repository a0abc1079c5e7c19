//! Demo catalog: the six launch products and the full category tree.

use super::{Catalog, Category, CategoryTree, Product};
use crate::types::{Price, ProductId};

const IMAGE_BASE: &str = "https://images.pexels.com/photos";

fn image(photo: u32) -> String {
    format!("{IMAGE_BASE}/{photo}/pexels-photo-{photo}.jpeg")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

impl Catalog {
    /// The demo catalog the storefront boots with when no catalog file is
    /// configured.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(demo_products(), demo_categories())
    }
}

/// The six demo products, in featured order.
#[must_use]
pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Elegant Maternity Wrap Dress".to_owned(),
            price: Price::eur(129),
            original_price: Some(Price::eur(159)),
            category: "CLOTHING".to_owned(),
            subcategory: "Dresses".to_owned(),
            colors: strings(&["Black", "Navy", "Burgundy"]),
            sizes: strings(&["XS", "S", "M", "L", "XL"]),
            images: vec![image(7_155_710), image(7_155_711), image(7_155_712)],
            description: "A sophisticated wrap dress designed for comfort and style throughout \
                          your pregnancy. Made from premium jersey fabric with a flattering \
                          silhouette."
                .to_owned(),
            features: strings(&[
                "Adjustable wrap design",
                "Premium jersey fabric",
                "Machine washable",
                "Nursing friendly",
            ]),
            is_new: true,
            is_bestseller: false,
            in_stock: true,
        },
        Product {
            id: ProductId::new("2"),
            name: "Nursing Support Bra".to_owned(),
            price: Price::eur(45),
            original_price: None,
            category: "BREASTFEEDING".to_owned(),
            subcategory: "Bras".to_owned(),
            colors: strings(&["Nude", "Black", "White"]),
            sizes: strings(&["32B", "34B", "36B", "38B", "32C", "34C", "36C", "38C"]),
            images: vec![image(7_156_336), image(7_156_337)],
            description: "Comfortable and supportive nursing bra with easy-access clips for \
                          convenient breastfeeding."
                .to_owned(),
            features: strings(&[
                "Easy-access nursing clips",
                "Soft cotton blend",
                "Wire-free comfort",
                "Adjustable straps",
            ]),
            is_new: false,
            is_bestseller: true,
            in_stock: true,
        },
        Product {
            id: ProductId::new("3"),
            name: "Postpartum Recovery Shorts".to_owned(),
            price: Price::eur(35),
            original_price: None,
            category: "POST PARTUM".to_owned(),
            subcategory: "Postpartum Garments".to_owned(),
            colors: strings(&["Black", "Nude"]),
            sizes: strings(&["XS", "S", "M", "L", "XL"]),
            images: vec![image(7_156_340), image(7_156_341)],
            description: "Supportive recovery shorts designed for postpartum comfort and healing."
                .to_owned(),
            features: strings(&[
                "Gentle compression",
                "Breathable fabric",
                "Seamless design",
                "Machine washable",
            ]),
            is_new: true,
            is_bestseller: false,
            in_stock: true,
        },
        Product {
            id: ProductId::new("4"),
            name: "Designer Diaper Bag".to_owned(),
            price: Price::eur(149),
            original_price: None,
            category: "MUM ESSENTIALS".to_owned(),
            subcategory: "Diaper Bags".to_owned(),
            colors: strings(&["Black", "Tan", "Navy"]),
            sizes: strings(&["One Size"]),
            images: vec![image(7_156_342), image(7_156_343)],
            description: "Stylish and functional diaper bag with multiple compartments for all \
                          your baby essentials."
                .to_owned(),
            features: strings(&[
                "Multiple compartments",
                "Insulated bottle holders",
                "Changing pad included",
                "Stroller straps",
            ]),
            is_new: false,
            is_bestseller: true,
            in_stock: true,
        },
        Product {
            id: ProductId::new("5"),
            name: "Organic Baby Onesie Set".to_owned(),
            price: Price::eur(39),
            original_price: None,
            category: "BABY ESSENTIALS".to_owned(),
            subcategory: "Baby Clothing".to_owned(),
            colors: strings(&["White", "Pink", "Blue"]),
            sizes: strings(&["0-3M", "3-6M", "6-9M", "9-12M"]),
            images: vec![image(7_156_344), image(7_156_345)],
            description: "Soft organic cotton onesie set perfect for your little one's delicate \
                          skin."
                .to_owned(),
            features: strings(&[
                "100% organic cotton",
                "Snap closures",
                "Machine washable",
                "Hypoallergenic",
            ]),
            is_new: true,
            is_bestseller: false,
            in_stock: true,
        },
        Product {
            id: ProductId::new("6"),
            name: "Bump Butter Moisturizer".to_owned(),
            price: Price::eur(28),
            original_price: None,
            category: "SELF & BABY CARE".to_owned(),
            subcategory: "Bump Butter".to_owned(),
            colors: strings(&["Natural"]),
            sizes: strings(&["100ml", "200ml"]),
            images: vec![image(7_156_346), image(7_156_347)],
            description: "Nourishing bump butter to keep your skin soft and hydrated during \
                          pregnancy."
                .to_owned(),
            features: strings(&[
                "Natural ingredients",
                "Deep moisturizing",
                "Stretch mark prevention",
                "Pleasant scent",
            ]),
            is_new: false,
            is_bestseller: true,
            in_stock: true,
        },
    ]
}

/// The storefront's category tree, in navigation order.
#[must_use]
pub fn demo_categories() -> CategoryTree {
    let tree: [(&str, &[&str]); 9] = [
        (
            "CLOTHING",
            &[
                "Dresses",
                "Tops",
                "Skirts",
                "Denim",
                "Coverups",
                "Shorts",
                "Official Pants",
                "Casual Pants",
                "Shirts",
                "Leggings",
                "Jump suits",
                "Pajamas",
                "Lounge Wear",
                "Tees",
                "Sets",
                "Ocassional",
                "Mum & Baby Outfits",
                "Underwear",
            ],
        ),
        (
            "BREASTFEEDING",
            &[
                "Bras",
                "Camis",
                "Breast Pads",
                "Milk Storage Bags",
                "Milk Carrier",
                "Breastmilk Freezer Organisers",
                "Breastfeeding & Lactation Support",
                "Lactation Teas",
                "Natural Fruit Hydration Mix",
                "Cocoa & Hot Chocolate",
                "Flours",
                "Soups",
            ],
        ),
        (
            "POST PARTUM",
            &[
                "Maternity Pads",
                "Cooling Pads",
                "Perri Bottles",
                "Recovery Packs",
                "Postpartum Garments",
            ],
        ),
        (
            "MUM ESSENTIALS",
            &["Diaper Bags", "Mommy Bags", "Breast Pumps", "Mama Hospital Kit"],
        ),
        (
            "BABY ESSENTIALS",
            &["Baby Clothing", "Baby Accessories", "Baby Feeding", "Baby Sleep"],
        ),
        (
            "SELF & BABY CARE",
            &[
                "Bump Butter",
                "Body Souffle",
                "Baby Souffle",
                "Baby Massage Oil",
                "Shower Steamers",
            ],
        ),
        (
            "GIFTS",
            &["Vouchers", "Mom Gifts", "Baby Gifts", "Baby Shower"],
        ),
        (
            "NURTURE MAMA SERVICES",
            &["Consultations", "Classes", "Support Groups"],
        ),
        (
            "BLOG & INFORMATION CENTRE",
            &[
                "Pregnancy Tips",
                "Parenting Advice",
                "Product Guides",
                "Expert Articles",
            ],
        ),
    ];

    CategoryTree::new(
        tree.iter()
            .map(|(name, subs)| Category {
                name: (*name).to_owned(),
                subcategories: strings(subs),
            })
            .collect(),
    )
}
