//! Normalize functions - map heterogeneous OpenNGC rows into CatalogEntry structs

use crate::catalog::types::{CatalogEntry, RawRow};
use crate::catalog::utils::{parse_float, parse_int};
use tracing::{info, warn};

// Column-name aliases per logical field, probed in order. OpenNGC releases
// are inconsistent about header casing and wording, so every field carries
// the variants seen in the wild.
const NAME_ALIASES: &[&str] = &["Name", "NAME", "name"];
const COMMON_NAME_ALIASES: &[&str] = &["Common names", "Common name", "CommonName", "Common"];
const TYPE_ALIASES: &[&str] = &["Type", "TYPE"];
const CONSTELLATION_ALIASES: &[&str] = &["Const", "CONST", "Constellation"];
const RA_ALIASES: &[&str] = &["RAJ2000", "RAdeg", "RA"];
const DEC_ALIASES: &[&str] = &["DEJ2000", "DEdeg", "Dec"];
const MAG_V_ALIASES: &[&str] = &["m_V", "Vmag", "V_MAG"];
const MAG_B_ALIASES: &[&str] = &["m_B", "Bmag", "B_MAG"];
const SURFACE_BRIGHTNESS_ALIASES: &[&str] = &["SurfBr", "SurfBr_V", "SurfaceBrightness"];
const MESSIER_ALIASES: &[&str] = &["Messier", "M"];

/// Resolve a logical field: first alias present with a non-empty value
fn lookup<'a>(row: &'a RawRow, aliases: &[&str]) -> Option<&'a str> {
    aliases
        .iter()
        .filter_map(|key| row.get(*key))
        .map(|value| value.as_str())
        .find(|value| !value.is_empty())
}

/// Convert raw rows into catalog entries, preserving input order.
///
/// Every row yields exactly one entry; bad numeric fields degrade to None
/// instead of rejecting the row.
pub fn build_entries(rows: &[RawRow], default_catalog: &str) -> Vec<CatalogEntry> {
    let entries: Vec<CatalogEntry> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| build_entry(row, default_catalog, idx))
        .collect();

    info!("Converted {} entries ({})", entries.len(), default_catalog);
    entries
}

fn build_entry(row: &RawRow, default_catalog: &str, idx: usize) -> CatalogEntry {
    let name = lookup(row, NAME_ALIASES);
    let common_name = lookup(row, COMMON_NAME_ALIASES);

    let ra_deg = parse_float(lookup(row, RA_ALIASES));
    let dec_deg = parse_float(lookup(row, DEC_ALIASES));

    // Prefer the V band measurement, fall back to B
    let mag_v = parse_float(lookup(row, MAG_V_ALIASES));
    let mag_b = parse_float(lookup(row, MAG_B_ALIASES));
    let mag = mag_v.or(mag_b);

    let surface_brightness = parse_float(lookup(row, SURFACE_BRIGHTNESS_ALIASES));

    let messier_code = lookup(row, MESSIER_ALIASES).unwrap_or("").trim();

    let (catalog, code, number) = if !messier_code.is_empty() {
        (
            "Messier".to_string(),
            format!("M{}", messier_code),
            parse_int(messier_code),
        )
    } else {
        let code = name.unwrap_or("").to_string();
        let digits: String = code.chars().filter(|c| c.is_ascii_digit()).collect();
        let number = if digits.is_empty() {
            None
        } else {
            parse_int(&digits)
        };
        (default_catalog.to_string(), code, number)
    };

    let mut id = if !code.is_empty() {
        code.clone()
    } else {
        name.unwrap_or("").trim().to_string()
    };

    // A row with no designation and no name would otherwise produce an
    // empty id; synthesize a positional placeholder instead.
    if id.is_empty() {
        id = format!("{}-{}", default_catalog, idx + 1);
        warn!("Row {} has no designation, synthesized id {}", idx, id);
    }

    // Cross-references to the other well-known catalogs, when present
    let ngc = lookup(row, &["NGC"]).map(str::to_string);
    let ic = lookup(row, &["IC"]).map(str::to_string);

    let display_name = common_name
        .or(name)
        .map(str::to_string)
        .unwrap_or_else(|| code.clone())
        .trim()
        .to_string();

    CatalogEntry {
        id,
        catalog,
        code,
        number,
        ngc,
        ic,
        name: display_name,
        object_type: lookup(row, TYPE_ALIASES).unwrap_or("").to_string(),
        constellation: lookup(row, CONSTELLATION_ALIASES).unwrap_or("").to_string(),
        ra_deg,
        dec_deg,
        mag,
        surface_brightness,
        image_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_lookup_probes_aliases_in_order() {
        let r = row(&[("NAME", "NGC0598"), ("name", "ignored")]);
        assert_eq!(lookup(&r, NAME_ALIASES), Some("NGC0598"));
    }

    #[test]
    fn test_lookup_skips_empty_values() {
        let r = row(&[("Name", ""), ("NAME", "NGC0598")]);
        assert_eq!(lookup(&r, NAME_ALIASES), Some("NGC0598"));
        assert_eq!(lookup(&r, TYPE_ALIASES), None);
    }

    #[test]
    fn test_messier_row() {
        let r = row(&[("Name", "NGC0224"), ("Messier", "31")]);
        let entry = build_entry(&r, "NGC/IC", 0);

        assert_eq!(entry.catalog, "Messier");
        assert_eq!(entry.code, "M31");
        assert_eq!(entry.number, Some(31));
        assert_eq!(entry.id, "M31");
    }

    #[test]
    fn test_non_messier_row_uses_default_catalog() {
        let r = row(&[("Name", "NGC0598"), ("Type", "G"), ("Const", "Tri")]);
        let entry = build_entry(&r, "NGC/IC", 0);

        assert_eq!(entry.catalog, "NGC/IC");
        assert_eq!(entry.code, "NGC0598");
        assert_eq!(entry.number, Some(598));
        assert_eq!(entry.object_type, "G");
        assert_eq!(entry.constellation, "Tri");
    }

    #[test]
    fn test_code_without_digits_has_no_number() {
        let r = row(&[("Name", "Mel")]);
        let entry = build_entry(&r, "Addendum", 0);

        assert_eq!(entry.code, "Mel");
        assert_eq!(entry.number, None);
    }

    #[test]
    fn test_mag_prefers_v_band() {
        let both = build_entry(&row(&[("Name", "X1"), ("m_V", "8.5"), ("m_B", "9.1")]), "NGC/IC", 0);
        assert_eq!(both.mag, Some(8.5));

        let b_only = build_entry(&row(&[("Name", "X1"), ("m_B", "9.1")]), "NGC/IC", 0);
        assert_eq!(b_only.mag, Some(9.1));

        let neither = build_entry(&row(&[("Name", "X1")]), "NGC/IC", 0);
        assert_eq!(neither.mag, None);
    }

    #[test]
    fn test_bad_numeric_fields_do_not_reject_row() {
        let r = row(&[("Name", "NGC0224"), ("RAJ2000", "not-a-number"), ("DEJ2000", "")]);
        let entry = build_entry(&r, "NGC/IC", 0);

        assert_eq!(entry.id, "NGC0224");
        assert_eq!(entry.ra_deg, None);
        assert_eq!(entry.dec_deg, None);
    }

    #[test]
    fn test_name_falls_back_through_common_then_designation() {
        let common = build_entry(
            &row(&[("Name", "NGC0224"), ("Common names", "Andromeda Galaxy")]),
            "NGC/IC",
            0,
        );
        assert_eq!(common.name, "Andromeda Galaxy");

        let designation_only = build_entry(&row(&[("Name", " NGC0224 ")]), "NGC/IC", 0);
        assert_eq!(designation_only.name, "NGC0224");
    }

    #[test]
    fn test_empty_row_gets_placeholder_id() {
        let entries = build_entries(&[row(&[("Name", "")])], "Addendum");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "Addendum-1");
        assert_eq!(entries[0].name, "");
    }

    #[test]
    fn test_cross_references_pass_through() {
        let r = row(&[("Name", "IC0342"), ("NGC", "NGC1560"), ("IC", "")]);
        let entry = build_entry(&r, "NGC/IC", 0);

        assert_eq!(entry.ngc.as_deref(), Some("NGC1560"));
        assert_eq!(entry.ic, None);
    }

    #[test]
    fn test_order_and_count_preserved() {
        let rows = vec![
            row(&[("Name", "NGC0001")]),
            row(&[("Name", "NGC0002")]),
            row(&[("Name", "NGC0003")]),
        ];
        let entries = build_entries(&rows, "NGC/IC");

        assert_eq!(entries.len(), 3);
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["NGC0001", "NGC0002", "NGC0003"]);
    }
}
