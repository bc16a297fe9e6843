use super::header::{Delimiter, FieldIndexMap, FieldSlot};

/// One data row of a headered vessel file. Absent fields are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VesselRecord<'a> {
    pub name: &'a str,
    pub vessel_type: &'a str,
    pub latitude: &'a str,
    pub longitude: &'a str,
    pub mmsi: &'a str,
}

impl<'a> VesselRecord<'a> {
    /// Pick the mapped fields out of `line`; `None` when the first field is blank.
    pub fn from_row(line: &'a str, delimiter: Delimiter, fields: &FieldIndexMap) -> Option<Self> {
        let row = delimiter.split(line);
        if row.first().map_or(true, |first| first.is_empty()) {
            return None;
        }
        Some(Self {
            name: fields.field(FieldSlot::Name, &row),
            vessel_type: fields.field(FieldSlot::Type, &row),
            latitude: fields.field(FieldSlot::Latitude, &row),
            longitude: fields.field(FieldSlot::Longitude, &row),
            mmsi: fields.field(FieldSlot::Mmsi, &row),
        })
    }

    /// `"<name | MMSI n>[ (<type>)][ at <lat>,<lon>]"`, or `None` if that is empty.
    pub fn describe(&self) -> Option<String> {
        let mut desc = if !self.name.is_empty() {
            self.name.to_string()
        } else if !self.mmsi.is_empty() {
            format!("MMSI {}", self.mmsi)
        } else {
            String::new()
        };
        if !self.vessel_type.is_empty() {
            desc.push_str(&format!(" ({})", self.vessel_type));
        }
        if !self.latitude.is_empty() && !self.longitude.is_empty() {
            desc.push_str(&format!(" at {},{}", self.latitude, self.longitude));
        }
        (!desc.is_empty()).then_some(desc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_beats_mmsi() {
        let record = VesselRecord {
            name: "Nordic Tide",
            mmsi: "257000000",
            ..Default::default()
        };
        assert_eq!(record.describe().as_deref(), Some("Nordic Tide"));
    }

    #[test]
    fn location_needs_both_coordinates() {
        let record = VesselRecord {
            mmsi: "1",
            latitude: "10.0",
            ..Default::default()
        };
        assert_eq!(record.describe().as_deref(), Some("MMSI 1"));
    }

    #[test]
    fn type_and_location_without_identity_still_describe() {
        let record = VesselRecord {
            vessel_type: "Tug",
            latitude: "1",
            longitude: "2",
            ..Default::default()
        };
        assert_eq!(record.describe().as_deref(), Some(" (Tug) at 1,2"));
    }

    #[test]
    fn empty_record_has_no_description() {
        assert_eq!(VesselRecord::default().describe(), None);
    }
}
