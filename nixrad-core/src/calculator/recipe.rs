//! Per-unit packing recipes.

use crate::config::{Catalog, RecipeItem};
use crate::model::{BomLine, Category, ProductDescriptor};

/// Recipe lines for one unit of a product.
pub fn recipe_for(descriptor: &ProductDescriptor, catalog: &Catalog) -> Vec<BomLine> {
    let recipes = &catalog.recipes;
    let template = match descriptor.category {
        Category::Radiator => &recipes.radiator,
        Category::TowelWarmer => &recipes.towel_warmer,
    };

    template
        .iter()
        .map(|line| {
            let item = match &line.item {
                RecipeItem::Fixed(name) => name.clone(),
                RecipeItem::ModelMounting => mounting_item(descriptor, catalog),
            };
            BomLine::new(line.quantity, line.unit.clone(), item)
        })
        .collect()
}

fn mounting_item(descriptor: &ProductDescriptor, catalog: &Catalog) -> String {
    if catalog.is_default_model(&descriptor.model_key) {
        catalog.recipes.generic_mounting.clone()
    } else {
        format!(
            "{} {}",
            descriptor.display_model_name, catalog.recipes.mounting_suffix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::interpret;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_radiator_recipe_names_model() {
        let catalog = Catalog::default();
        let recipe = recipe_for(&interpret("NIRVANA 500/1270 BEYAZ", &catalog), &catalog);

        assert_eq!(
            recipe,
            vec![
                BomLine::new(2, "Adet", "Kör Tapa"),
                BomLine::new(1, "Adet", "Hava Tahliye Tapası"),
                BomLine::new(1, "Takım", "Nirvana Ayak Seti"),
                BomLine::new(4, "Adet", "Dübel"),
                BomLine::new(4, "Adet", "Vida"),
                BomLine::new(2, "Metre", "Streç Film"),
            ]
        );
    }

    #[test]
    fn test_radiator_recipe_irregular_display_name() {
        let catalog = Catalog::default();
        let recipe = recipe_for(&interpret("LIVERA 600/800", &catalog), &catalog);
        assert_eq!(recipe[2].item, "Livara Ayak Seti");
    }

    #[test]
    fn test_standart_uses_generic_mounting() {
        let catalog = Catalog::default();
        let recipe = recipe_for(&interpret("RADYATÖR 600/1000", &catalog), &catalog);
        assert_eq!(recipe[2].item, "Standart Montaj Seti");
    }

    #[test]
    fn test_towel_warmer_recipe_ignores_model() {
        let catalog = Catalog::default();
        let recipe = recipe_for(&interpret("PRAG HAVLUPAN 500/800", &catalog), &catalog);
        assert!(recipe.iter().all(|l| !l.item.contains("Prag")));
        assert_eq!(recipe[2], BomLine::new(1, "Takım", "Havlupan Montaj Seti"));
    }
}
