//! Header detection, delimiter choice and column lookup.
//!
//! Columns are matched against an ordered rule table. Scanning the header left
//! to right, each slot takes the first column whose lowercased, trimmed name
//! satisfies its rule; later matches for a filled slot are ignored. A single
//! column may fill more than one slot (e.g. `ship_name_type`).

/// Lowercase keywords that mark the first line as a header.
const HEADER_KEYWORDS: [&str; 5] = ["mmsi", "name", "vessel", "latitude", "longitude"];

/// True if the (trimmed) first line looks like a column header.
pub fn is_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    HEADER_KEYWORDS.iter().any(|k| lower.contains(k))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    /// Comma unless the header has strictly more tabs than commas.
    pub fn detect(header: &str) -> Self {
        let commas = header.matches(',').count();
        let tabs = header.matches('\t').count();
        if commas >= tabs {
            Delimiter::Comma
        } else {
            Delimiter::Tab
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }

    /// Split a line and trim every field.
    pub fn split(self, line: &str) -> Vec<&str> {
        line.split(self.as_char()).map(str::trim).collect()
    }
}

/// Canonical vessel fields located in the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldSlot {
    Name,
    Type,
    Latitude,
    Longitude,
    Mmsi,
}

impl FieldSlot {
    pub const ALL: [FieldSlot; 5] = [
        FieldSlot::Name,
        FieldSlot::Type,
        FieldSlot::Latitude,
        FieldSlot::Longitude,
        FieldSlot::Mmsi,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

enum ColumnRule {
    Contains(&'static str),
    OneOf(&'static [&'static str]),
}

impl ColumnRule {
    fn matches(&self, column: &str) -> bool {
        match self {
            ColumnRule::Contains(needle) => column.contains(*needle),
            ColumnRule::OneOf(names) => names.iter().any(|name| *name == column),
        }
    }
}

const FIELD_RULES: [(FieldSlot, ColumnRule); 5] = [
    (FieldSlot::Name, ColumnRule::Contains("name")),
    (FieldSlot::Type, ColumnRule::Contains("type")),
    (FieldSlot::Latitude, ColumnRule::OneOf(&["latitude", "lat"])),
    (
        FieldSlot::Longitude,
        ColumnRule::OneOf(&["longitude", "lon", "long"]),
    ),
    (FieldSlot::Mmsi, ColumnRule::OneOf(&["mmsi"])),
];

/// Column position of each canonical field, built once per file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldIndexMap {
    slots: [Option<usize>; 5],
}

impl FieldIndexMap {
    pub fn from_header(header: &str, delimiter: Delimiter) -> Self {
        let columns: Vec<String> = delimiter
            .split(header)
            .into_iter()
            .map(str::to_lowercase)
            .collect();
        Self::from_columns(&columns)
    }

    /// Build from already lowercased, trimmed column names.
    pub fn from_columns<S: AsRef<str>>(columns: &[S]) -> Self {
        let mut map = Self::default();
        for (idx, column) in columns.iter().enumerate() {
            let column = column.as_ref();
            for (slot, rule) in &FIELD_RULES {
                let entry = &mut map.slots[slot.index()];
                if entry.is_none() && rule.matches(column) {
                    *entry = Some(idx);
                }
            }
        }
        map
    }

    pub fn get(&self, slot: FieldSlot) -> Option<usize> {
        self.slots[slot.index()]
    }

    /// Field for `slot` in a split row; empty when unmapped or out of range.
    pub fn field<'a>(&self, slot: FieldSlot, row: &[&'a str]) -> &'a str {
        self.get(slot)
            .and_then(|idx| row.get(idx).copied())
            .unwrap_or("")
    }
}
