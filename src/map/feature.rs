// src/map/feature.rs

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RoomError};
use crate::map::tile::Tile;

/// Built-in feature symbols with their legend names, in alphabet order.
pub const BUILTIN_FEATURES: [(char, &str); 3] = [
    ('$', "Treasure"),
    ('M', "Monster"),
    ('*', "Special Feature"),
];

/// Symbols offered when defining a custom feature.
pub const SYMBOL_PALETTE: [char; 8] = ['♥', '@', '%', '^', '&', '_', '~', '='];

/// The default feature alphabet: `$`, `M`, `*`.
pub fn default_alphabet() -> Vec<char> {
    BUILTIN_FEATURES.iter().map(|(symbol, _)| *symbol).collect()
}

/// Display colours a custom feature may be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureColor {
    Green,
    Blue,
    Cyan,
    Emerald,
    Teal,
    Indigo,
    Violet,
    Pink,
}

impl FeatureColor {
    pub const ALL: [FeatureColor; 8] = [
        FeatureColor::Green,
        FeatureColor::Blue,
        FeatureColor::Cyan,
        FeatureColor::Emerald,
        FeatureColor::Teal,
        FeatureColor::Indigo,
        FeatureColor::Violet,
        FeatureColor::Pink,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FeatureColor::Green => "Green",
            FeatureColor::Blue => "Blue",
            FeatureColor::Cyan => "Cyan",
            FeatureColor::Emerald => "Emerald",
            FeatureColor::Teal => "Teal",
            FeatureColor::Indigo => "Indigo",
            FeatureColor::Violet => "Violet",
            FeatureColor::Pink => "Pink",
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            FeatureColor::Green => [0x16, 0xa3, 0x4a],
            FeatureColor::Blue => [0x25, 0x63, 0xeb],
            FeatureColor::Cyan => [0x08, 0x91, 0xb2],
            FeatureColor::Emerald => [0x05, 0x96, 0x69],
            FeatureColor::Teal => [0x0d, 0x94, 0x88],
            FeatureColor::Indigo => [0x4f, 0x46, 0xe5],
            FeatureColor::Violet => [0x7c, 0x3a, 0xed],
            FeatureColor::Pink => [0xdb, 0x27, 0x77],
        }
    }
}

/// A user-defined feature type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFeature {
    pub name: String,
    pub symbol: char,
    pub color: FeatureColor,
}

/// The built-in features plus any custom ones, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCatalogue {
    custom: Vec<CustomFeature>,
}

impl FeatureCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn custom(&self) -> &[CustomFeature] {
        &self.custom
    }

    /// Registers a custom feature. The name must be non-blank and the symbol
    /// must be neither structural nor already part of the alphabet.
    pub fn add(&mut self, name: &str, symbol: char, color: FeatureColor) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RoomError::EmptyFeatureName);
        }
        if Tile::is_reserved(symbol) {
            return Err(RoomError::ReservedSymbol { symbol });
        }
        if self.alphabet().contains(&symbol) {
            return Err(RoomError::DuplicateSymbol { symbol });
        }
        info!("Added custom feature '{}' ({}, {})", name, symbol, color.name());
        self.custom.push(CustomFeature {
            name: name.to_string(),
            symbol,
            color,
        });
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<CustomFeature> {
        if index < self.custom.len() {
            let removed = self.custom.remove(index);
            info!("Removed custom feature '{}'", removed.name);
            Some(removed)
        } else {
            None
        }
    }

    /// Built-in symbols followed by custom symbols.
    pub fn alphabet(&self) -> Vec<char> {
        let mut symbols = default_alphabet();
        symbols.extend(self.custom.iter().map(|f| f.symbol));
        symbols
    }

    pub fn find(&self, symbol: char) -> Option<&CustomFeature> {
        self.custom.iter().find(|f| f.symbol == symbol)
    }

    /// Human readable description of any cell symbol. Unknown symbols
    /// describe themselves.
    pub fn describe(&self, symbol: char) -> String {
        if let Some(custom) = self.find(symbol) {
            return custom.name.clone();
        }
        if let Some(name) = Tile::classify(symbol).name() {
            return name.to_string();
        }
        BUILTIN_FEATURES
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, name)| name.to_string())
            .unwrap_or_else(|| symbol.to_string())
    }

    /// Legend rows: structural tiles, built-ins, then custom features.
    pub fn legend(&self) -> Vec<(char, String)> {
        let mut rows: Vec<(char, String)> = [Tile::Wall, Tile::Floor, Tile::Door]
            .iter()
            .map(|tile| (tile.symbol(), self.describe(tile.symbol())))
            .collect();
        rows.extend(BUILTIN_FEATURES.iter().map(|(s, name)| (*s, name.to_string())));
        rows.extend(self.custom.iter().map(|f| (f.symbol, f.name.clone())));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_appends_custom_symbols_in_order() {
        let mut catalogue = FeatureCatalogue::new();
        assert_eq!(catalogue.alphabet(), vec!['$', 'M', '*']);

        catalogue.add("Altar", '♥', FeatureColor::Pink).unwrap();
        catalogue.add("Trap", '^', FeatureColor::Indigo).unwrap();
        assert_eq!(catalogue.alphabet(), vec!['$', 'M', '*', '♥', '^']);
    }

    #[test]
    fn test_add_rejects_bad_features() {
        let mut catalogue = FeatureCatalogue::new();
        assert!(matches!(
            catalogue.add("   ", '@', FeatureColor::Green),
            Err(RoomError::EmptyFeatureName)
        ));
        assert!(matches!(
            catalogue.add("Gate", '+', FeatureColor::Green),
            Err(RoomError::ReservedSymbol { symbol: '+' })
        ));
        assert!(matches!(
            catalogue.add("Gold", '$', FeatureColor::Green),
            Err(RoomError::DuplicateSymbol { symbol: '$' })
        ));
        catalogue.add("Well", '~', FeatureColor::Blue).unwrap();
        assert!(matches!(
            catalogue.add("Pool", '~', FeatureColor::Cyan),
            Err(RoomError::DuplicateSymbol { symbol: '~' })
        ));
        assert_eq!(catalogue.custom().len(), 1);
    }

    #[test]
    fn test_remove_by_index() {
        let mut catalogue = FeatureCatalogue::new();
        catalogue.add("Altar", '♥', FeatureColor::Pink).unwrap();
        catalogue.add("Trap", '^', FeatureColor::Indigo).unwrap();

        let removed = catalogue.remove(0).unwrap();
        assert_eq!(removed.symbol, '♥');
        assert!(catalogue.remove(5).is_none());
        assert_eq!(catalogue.alphabet(), vec!['$', 'M', '*', '^']);
    }

    #[test]
    fn test_describe_tiles() {
        let mut catalogue = FeatureCatalogue::new();
        catalogue.add("Statue", '&', FeatureColor::Teal).unwrap();

        assert_eq!(catalogue.describe('#'), "Wall");
        assert_eq!(catalogue.describe('+'), "Door");
        assert_eq!(catalogue.describe('.'), "Empty Floor");
        assert_eq!(catalogue.describe('$'), "Treasure");
        assert_eq!(catalogue.describe('M'), "Monster");
        assert_eq!(catalogue.describe('*'), "Special Feature");
        assert_eq!(catalogue.describe('&'), "Statue");
        assert_eq!(catalogue.describe('?'), "?");
    }

    #[test]
    fn test_legend_lists_everything() {
        let mut catalogue = FeatureCatalogue::new();
        catalogue.add("Statue", '&', FeatureColor::Teal).unwrap();
        let symbols: Vec<char> = catalogue.legend().into_iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec!['#', '.', '+', '$', 'M', '*', '&']);
    }
}
