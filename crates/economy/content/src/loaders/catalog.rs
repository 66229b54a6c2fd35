//! Catalog loaders.

use std::path::Path;

use economy_core::{ArtifactDefinition, ChestDefinition, CraftArtifactDefinition, WeaponDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Chest catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChestCatalog {
    pub chests: Vec<ChestDefinition>,
}

/// Main shop catalog structure for RON files: purchasable artifacts,
/// the craft drop pool, and weapons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainCatalog {
    pub artifacts: Vec<ArtifactDefinition>,
    pub craft_pool: Vec<CraftArtifactDefinition>,
    #[serde(default)]
    pub weapons: Vec<WeaponDefinition>,
}

/// Loader for catalog overrides from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a chest catalog from a RON file.
    pub fn load_chests(path: &Path) -> LoadResult<Vec<ChestDefinition>> {
        let content = read_file(path)?;
        let catalog: ChestCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse chest catalog RON: {}", e))?;

        Ok(catalog.chests)
    }

    /// Load the main shop catalog from a RON file.
    pub fn load_main(path: &Path) -> LoadResult<MainCatalog> {
        let content = read_file(path)?;
        let catalog: MainCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse main catalog RON: {}", e))?;

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn chest_catalog_round_trips_through_ron() {
        let catalog = ChestCatalog {
            chests: crate::builtin::builtin_chests(),
        };
        let text = ron::to_string(&catalog).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();

        let loaded = CatalogLoader::load_chests(file.path()).unwrap();
        assert_eq!(loaded, catalog.chests);
    }

    #[test]
    fn main_catalog_round_trips_through_ron() {
        use economy_core::{Rarity, StatVector};

        let catalog = MainCatalog {
            artifacts: vec![ArtifactDefinition {
                id: 201,
                name: "Iron Band".to_string(),
                rarity: Rarity::Common,
                stats: StatVector {
                    attack: 3,
                    defense: 2,
                    health: 10,
                    ..StatVector::default()
                },
                base_level: 1,
            }],
            craft_pool: vec![CraftArtifactDefinition {
                id: 101,
                category: "ring".to_string(),
                name: "Band".to_string(),
                base_level: 1,
            }],
            weapons: vec![WeaponDefinition {
                id: 301,
                name: "Short Sword".to_string(),
                category: "sword".to_string(),
                attack: 4,
                defense: 0,
                skill: None,
                cost: 0.35,
            }],
        };
        let text = ron::to_string(&catalog).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();

        let loaded = CatalogLoader::load_main(file.path()).unwrap();
        assert_eq!(loaded.artifacts, catalog.artifacts);
        assert_eq!(loaded.craft_pool, catalog.craft_pool);
        assert_eq!(loaded.weapons, catalog.weapons);
    }

    #[test]
    fn main_catalog_weapons_field_is_optional() {
        let text = r#"(
            artifacts: [],
            craft_pool: [(id: 7, category: "ring", name: "Band", base_level: 1)],
        )"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();

        let loaded = CatalogLoader::load_main(file.path()).unwrap();
        assert_eq!(loaded.craft_pool.len(), 1);
        assert_eq!(loaded.craft_pool[0].name, "Band");
        assert!(loaded.weapons.is_empty());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = CatalogLoader::load_chests(Path::new("/nonexistent/chests.ron")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/chests.ron"));
    }
}
