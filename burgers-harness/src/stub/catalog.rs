use stellar_burgers_core::Ingredient;

const IMAGE_BASE: &str = "https://code.s3.yandex.net/react/code";

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    kind: &'static str,
    proteins: u32,
    fat: u32,
    carbohydrates: u32,
    calories: u32,
    price: u32,
    image: &'static str,
    // Contributes to the generated burger name
    order_word: &'static str,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "61c0c5a71d1f82001bdaaa6c",
        name: "Краторная булка N-200i",
        kind: "bun",
        proteins: 80,
        fat: 24,
        carbohydrates: 53,
        calories: 420,
        price: 1255,
        image: "bun-02",
        order_word: "Краторный",
    },
    CatalogEntry {
        id: "61c0c5a71d1f82001bdaaa6d",
        name: "Флюоресцентная булка R2-D3",
        kind: "bun",
        proteins: 44,
        fat: 26,
        carbohydrates: 85,
        calories: 643,
        price: 988,
        image: "bun-01",
        order_word: "Флюоресцентный",
    },
    CatalogEntry {
        id: "61c0c5a71d1f82001bdaaa6e",
        name: "Биокотлета из марсианской Магнолии",
        kind: "main",
        proteins: 420,
        fat: 142,
        carbohydrates: 242,
        calories: 4242,
        price: 424,
        image: "meat-01",
        order_word: "био-марсианский",
    },
    CatalogEntry {
        id: "61c0c5a71d1f82001bdaaa6f",
        name: "Филе Люминесцентного тетраодонтимформа",
        kind: "main",
        proteins: 44,
        fat: 26,
        carbohydrates: 85,
        calories: 643,
        price: 988,
        image: "meat-03",
        order_word: "люминесцентный",
    },
    CatalogEntry {
        id: "61c0c5a71d1f82001bdaaa70",
        name: "Мясо бессмертных моллюсков Protostomia",
        kind: "main",
        proteins: 433,
        fat: 244,
        carbohydrates: 33,
        calories: 420,
        price: 1337,
        image: "meat-02",
        order_word: "бессмертный",
    },
    CatalogEntry {
        id: "61c0c5a71d1f82001bdaaa71",
        name: "Говяжий метеорит (отбивная)",
        kind: "main",
        proteins: 800,
        fat: 800,
        carbohydrates: 300,
        calories: 2674,
        price: 3000,
        image: "meat-04",
        order_word: "метеоритный",
    },
    CatalogEntry {
        id: "61c0c5a71d1f82001bdaaa72",
        name: "Соус Spicy-X",
        kind: "sauce",
        proteins: 30,
        fat: 20,
        carbohydrates: 40,
        calories: 30,
        price: 90,
        image: "sauce-02",
        order_word: "spicy",
    },
    CatalogEntry {
        id: "61c0c5a71d1f82001bdaaa73",
        name: "Соус фирменный Space Sauce",
        kind: "sauce",
        proteins: 50,
        fat: 22,
        carbohydrates: 11,
        calories: 14,
        price: 80,
        image: "sauce-04",
        order_word: "space",
    },
    CatalogEntry {
        id: "61c0c5a71d1f82001bdaaa74",
        name: "Соус традиционный галактический",
        kind: "sauce",
        proteins: 42,
        fat: 24,
        carbohydrates: 42,
        calories: 99,
        price: 15,
        image: "sauce-03",
        order_word: "традиционный-галактический",
    },
    CatalogEntry {
        id: "61c0c5a71d1f82001bdaaa75",
        name: "Соус с шипами Антарианского плоскоходца",
        kind: "sauce",
        proteins: 101,
        fat: 99,
        carbohydrates: 100,
        calories: 100,
        price: 88,
        image: "sauce-01",
        order_word: "антарианский",
    },
    CatalogEntry {
        id: "61c0c5a71d1f82001bdaaa76",
        name: "Хрустящие минеральные кольца",
        kind: "main",
        proteins: 808,
        fat: 689,
        carbohydrates: 609,
        calories: 986,
        price: 300,
        image: "mineral_rings",
        order_word: "минеральный",
    },
    CatalogEntry {
        id: "61c0c5a71d1f82001bdaaa77",
        name: "Плоды Фалленианского дерева",
        kind: "main",
        proteins: 20,
        fat: 5,
        carbohydrates: 55,
        calories: 77,
        price: 874,
        image: "sp_1",
        order_word: "фалленианский",
    },
    CatalogEntry {
        id: "61c0c5a71d1f82001bdaaa78",
        name: "Кристаллы марсианских альфа-сахаридов",
        kind: "main",
        proteins: 234,
        fat: 432,
        carbohydrates: 111,
        calories: 189,
        price: 762,
        image: "core",
        order_word: "альфа-сахаридный",
    },
    CatalogEntry {
        id: "61c0c5a71d1f82001bdaaa79",
        name: "Мини-салат Экзо-Плантаго",
        kind: "main",
        proteins: 1,
        fat: 2,
        carbohydrates: 3,
        calories: 6,
        price: 4400,
        image: "salad",
        order_word: "экзо-плантаго",
    },
    CatalogEntry {
        id: "61c0c5a71d1f82001bdaaa7a",
        name: "Сыр с астероидной плесенью",
        kind: "main",
        proteins: 84,
        fat: 48,
        carbohydrates: 420,
        calories: 3377,
        price: 4142,
        image: "cheese",
        order_word: "астероидный",
    },
];

fn to_ingredient(entry: &CatalogEntry) -> Ingredient {
    Ingredient {
        id: entry.id.to_string(),
        name: entry.name.to_string(),
        kind: entry.kind.to_string(),
        proteins: entry.proteins,
        fat: entry.fat,
        carbohydrates: entry.carbohydrates,
        calories: entry.calories,
        price: entry.price,
        image: format!("{}/{}.png", IMAGE_BASE, entry.image),
        image_mobile: format!("{}/{}-mobile.png", IMAGE_BASE, entry.image),
        image_large: format!("{}/{}-large.png", IMAGE_BASE, entry.image),
    }
}

pub fn ingredients() -> Vec<Ingredient> {
    CATALOG.iter().map(to_ingredient).collect()
}

pub fn find(id: &str) -> Option<Ingredient> {
    CATALOG.iter().find(|e| e.id == id).map(to_ingredient)
}

/// Mongo-style object id: exactly 24 hex digits.
pub fn is_object_id(id: &str) -> bool {
    id.len() == 24 && id.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Burger name built from the distinct ingredients, in catalog order.
pub fn order_name(ids: &[String]) -> String {
    let words: Vec<&str> = CATALOG
        .iter()
        .filter(|e| ids.iter().any(|id| id == e.id))
        .map(|e| e.order_word)
        .collect();
    format!("{} бургер", words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_object_ids() {
        for ingredient in ingredients() {
            assert!(is_object_id(&ingredient.id), "{}", ingredient.id);
        }
    }

    #[test]
    fn uuid_is_not_an_object_id() {
        assert!(!is_object_id("2f1c9a8e-4a57-4f51-9a6c-6a4c0e5b2a11"));
        assert!(!is_object_id("61c0c5a71d1f82001bdaaa6"));
        assert!(is_object_id("0123456789abcdefABCDEF01"));
    }

    #[test]
    fn order_name_dedupes_and_keeps_catalog_order() {
        let ids = vec![
            "61c0c5a71d1f82001bdaaa72".to_string(),
            "61c0c5a71d1f82001bdaaa6d".to_string(),
            "61c0c5a71d1f82001bdaaa6d".to_string(),
        ];
        assert_eq!(order_name(&ids), "Флюоресцентный spicy бургер");
    }

    #[test]
    fn find_returns_images() {
        let bun = find("61c0c5a71d1f82001bdaaa6d").unwrap();
        assert_eq!(bun.kind, "bun");
        assert_eq!(bun.image_large, "https://code.s3.yandex.net/react/code/bun-01-large.png");
        assert!(find("ffffffffffffffffffffffff").is_none());
    }
}
