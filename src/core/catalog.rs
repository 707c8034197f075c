//! Ordered recipe registry and the resolver that walks it.
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

use crate::core::descriptor::ImageDescriptor;
use crate::core::matchers::Matcher;
use crate::core::recipes::{JERS_RECIPE, RADARSAT_RECIPE, RecipeTable, SCANSAR_RECIPE, SIRC_RECIPE};
use crate::io::record::RecordStore;

/// A named recipe: the table and the matcher that applies it.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct ProductRecipe {
    pub name: &'static str,
    pub matcher: Matcher,
    #[serde(skip)]
    pub table: RecipeTable,
}

impl ProductRecipe {
    pub const fn new(name: &'static str, matcher: Matcher, table: RecipeTable) -> Self {
        Self {
            name,
            matcher,
            table,
        }
    }

    pub fn attempt(&self, store: &dyn RecordStore, desc: &mut ImageDescriptor) -> bool {
        self.matcher.attempt(store, self.table, desc)
    }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub recipe: &'static str,
    pub descriptor: ImageDescriptor,
}

/// Built-in recipes in match priority order. Signature-sniffing recipes come
/// before the generic ones that share their table.
pub fn builtin_recipes() -> [ProductRecipe; 5] {
    [
        ProductRecipe::new("SIR-C", Matcher::Sirc, SIRC_RECIPE),
        ProductRecipe::new("PALSAR-ALOS", Matcher::Palsar, RADARSAT_RECIPE),
        ProductRecipe::new("RadarSat", Matcher::Default, RADARSAT_RECIPE),
        ProductRecipe::new("Jers", Matcher::Default, JERS_RECIPE),
        ProductRecipe::new("ScanSAR", Matcher::ScanSar, SCANSAR_RECIPE),
    ]
}

static BUILTIN_CATALOG: Lazy<RecipeCatalog> =
    Lazy::new(|| RecipeCatalog::builder().extend(builtin_recipes()).build());

/// Immutable, ordered list of recipes.
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Vec<ProductRecipe>,
}

impl RecipeCatalog {
    /// The process-wide catalog of built-in recipes, initialised on first use.
    pub fn builtin() -> &'static RecipeCatalog {
        &BUILTIN_CATALOG
    }

    pub fn builder() -> RecipeCatalogBuilder {
        RecipeCatalogBuilder::default()
    }

    pub fn recipes(&self) -> &[ProductRecipe] {
        &self.recipes
    }

    pub fn get(&self, name: &str) -> Option<&ProductRecipe> {
        self.recipes.iter().find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// Try each recipe in order and return the first that yields a valid
    /// descriptor.
    pub fn resolve(&self, store: &dyn RecordStore) -> Option<Resolution> {
        let mut desc = ImageDescriptor::default();
        for recipe in &self.recipes {
            if recipe.attempt(store, &mut desc) {
                debug!("Using recipe '{}'", recipe.name);
                return Some(Resolution {
                    recipe: recipe.name,
                    descriptor: desc,
                });
            }
            debug!("Recipe '{}' does not apply", recipe.name);
        }
        None
    }
}

/// Append-only construction of a custom catalog.
#[derive(Debug, Default)]
pub struct RecipeCatalogBuilder {
    recipes: Vec<ProductRecipe>,
}

impl RecipeCatalogBuilder {
    pub fn recipe(mut self, recipe: ProductRecipe) -> Self {
        self.recipes.push(recipe);
        self
    }

    pub fn extend<I: IntoIterator<Item = ProductRecipe>>(mut self, recipes: I) -> Self {
        self.recipes.extend(recipes);
        self
    }

    pub fn build(self) -> RecipeCatalog {
        RecipeCatalog {
            recipes: self.recipes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order() {
        let names: Vec<_> = RecipeCatalog::builtin()
            .recipes()
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["SIR-C", "PALSAR-ALOS", "RadarSat", "Jers", "ScanSAR"]);
    }

    #[test]
    fn palsar_shares_the_generic_table() {
        let catalog = RecipeCatalog::builtin();
        let palsar = catalog.get("palsar-alos").unwrap();
        let radarsat = catalog.get("RadarSat").unwrap();
        assert!(std::ptr::eq(palsar.table, radarsat.table));
    }

    #[test]
    fn builder_keeps_insertion_order() {
        let [sirc, _, _, jers, _] = builtin_recipes();
        let catalog = RecipeCatalog::builder().recipe(jers).recipe(sirc).build();
        assert_eq!(catalog.recipes()[0].name, "Jers");
        assert_eq!(catalog.recipes()[1].name, "SIR-C");
    }
}
