//! # Seed Catalog
//!
//! The store's starter assortment: two spray paints, two varnishes and two
//! primers. Used by the CLI and by tests that need a realistic catalog.

use paintshop_core::{Category, Product};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=300&width=300";

/// (id, name, description, price_cents, category, stock, brand, size)
type SeedRow = (
    &'static str,
    &'static str,
    &'static str,
    i64,
    Category,
    i64,
    &'static str,
    &'static str,
);

const PRODUCTS: &[SeedRow] = &[
    (
        "1",
        "Премиум акриловая краска-спрей - Красная",
        "Высококачественная акриловая краска-спрей с отличным покрытием и долговечностью. \
         Идеально подходит для автомобильных, мебельных и ремесленных проектов.",
        89_900,
        Category::SprayPaint,
        50,
        "КрасМакс",
        "400мл",
    ),
    (
        "2",
        "Матовая черная краска-спрей",
        "Профессиональная матовая черная краска-спрей для гладкого, неотражающего покрытия.",
        109_900,
        Category::SprayPaint,
        35,
        "ПроКоат",
        "500мл",
    ),
    (
        "3",
        "Прозрачный защитный лак",
        "Кристально прозрачный защитный лак, обеспечивающий долговременную защиту \
         от погодных условий и УФ-лучей.",
        139_900,
        Category::Varnish,
        25,
        "ЩитКоат",
        "750мл",
    ),
    (
        "4",
        "Лак-морилка для дерева - Дуб",
        "Красивая морилка цвета дуба с лаком для натуральной отделки дерева.",
        169_900,
        Category::Varnish,
        20,
        "ВудКрафт",
        "1л",
    ),
    (
        "5",
        "Грунтовка по металлу - Антикоррозийная",
        "Высокоэффективная грунтовка по металлу, предотвращающая ржавчину \
         и обеспечивающая отличную адгезию для финишных покрытий.",
        124_900,
        Category::Primer,
        40,
        "МеталГард",
        "500мл",
    ),
    (
        "6",
        "Универсальная грунтовка - Белая",
        "Многоповерхностная грунтовка, подходящая для дерева, металла и пластика. \
         Отличная основа для любого финишного покрытия.",
        99_900,
        Category::Primer,
        60,
        "БейзКоат",
        "400мл",
    ),
];

/// Returns the seed products in catalog order.
pub fn paint_catalog() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(
            |&(id, name, description, price_cents, category, stock, brand, size)| Product {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                price_cents,
                category,
                image: PLACEHOLDER_IMAGE.to_string(),
                stock,
                brand: brand.to_string(),
                size: size.to_string(),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_sellable() {
        let products = paint_catalog();
        assert_eq!(products.len(), 6);
        assert!(products.iter().all(Product::is_purchasable));
        for category in Category::ALL {
            assert_eq!(products.iter().filter(|p| p.category == category).count(), 2);
        }
    }
}
