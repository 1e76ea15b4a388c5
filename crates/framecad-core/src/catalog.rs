use serde::{Deserialize, Serialize};

/// Framing lumber species group a connector is rated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WoodType {
    DouglasFir,
    SouthernPine,
    SprucePineFir,
}

/// Connector family within the hardware catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectorKind {
    Holdown,
    Strap,
}

/// One row of the hardware catalog: a connector model and its allowable
/// load for a given wood type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorRecord {
    pub model: String,
    pub kind: ConnectorKind,
    pub wood_type: WoodType,
    /// Allowable tension load in pounds.
    pub allowable_load: f64,
}

impl ConnectorRecord {
    pub fn new(model: &str, kind: ConnectorKind, wood_type: WoodType, allowable_load: f64) -> Self {
        Self {
            model: model.to_string(),
            kind,
            wood_type,
            allowable_load,
        }
    }
}

/// An immutable hardware-catalog table, constructed once at startup and
/// passed by reference to whatever needs a lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorCatalog {
    records: Vec<ConnectorRecord>,
}

impl ConnectorCatalog {
    pub fn new(records: Vec<ConnectorRecord>) -> Self {
        Self { records }
    }

    /// The built-in holdown and strap tables.
    pub fn builtin() -> Self {
        use ConnectorKind::{Holdown, Strap};
        use WoodType::{DouglasFir, SouthernPine, SprucePineFir};
        Self::new(vec![
            ConnectorRecord::new("HDU2", Holdown, DouglasFir, 3075.0),
            ConnectorRecord::new("HDU4", Holdown, DouglasFir, 4565.0),
            ConnectorRecord::new("HDU5", Holdown, DouglasFir, 5645.0),
            ConnectorRecord::new("HDU8", Holdown, DouglasFir, 6970.0),
            ConnectorRecord::new("HDU11", Holdown, DouglasFir, 9335.0),
            ConnectorRecord::new("HDU14", Holdown, DouglasFir, 14445.0),
            ConnectorRecord::new("HDU2", Holdown, SprucePineFir, 2215.0),
            ConnectorRecord::new("HDU4", Holdown, SprucePineFir, 3285.0),
            ConnectorRecord::new("HDU5", Holdown, SprucePineFir, 4065.0),
            ConnectorRecord::new("HDU8", Holdown, SprucePineFir, 5020.0),
            ConnectorRecord::new("CS16", Strap, DouglasFir, 1705.0),
            ConnectorRecord::new("CS14", Strap, DouglasFir, 2145.0),
            ConnectorRecord::new("MSTC40", Strap, DouglasFir, 4585.0),
            ConnectorRecord::new("MSTC52", Strap, DouglasFir, 5930.0),
            ConnectorRecord::new("CS16", Strap, SouthernPine, 1745.0),
            ConnectorRecord::new("MSTC40", Strap, SouthernPine, 4735.0),
        ])
    }

    /// All connector models rated for `wood_type` whose allowable load meets
    /// or exceeds `load`, sorted by ascending capacity.
    pub fn models_exceeding_load(&self, load: f64, wood_type: WoodType) -> Vec<&ConnectorRecord> {
        let mut matches: Vec<&ConnectorRecord> = self
            .records
            .iter()
            .filter(|r| r.wood_type == wood_type && r.allowable_load >= load)
            .collect();
        matches.sort_by(|a, b| a.allowable_load.total_cmp(&b.allowable_load));
        matches
    }

    pub fn records(&self) -> &[ConnectorRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
