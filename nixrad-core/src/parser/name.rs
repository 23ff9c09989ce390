//! Product-name interpreter.
//!
//! Turns a free-text stock name such as `NIRVANA 500/1270 BEYAZ` into a
//! [`ProductDescriptor`]. All lookups are substring searches over catalog
//! tables in table order; the first hit wins.

use tracing::debug;

use super::casefold::{fold_lower, match_form};
use crate::config::{Catalog, ModelDepth, SEGMENT_TOKEN};
use crate::model::{Category, ProductDescriptor, RawDimensions};

/// Interpret a product name against a catalog.
pub fn interpret(raw_name: &str, catalog: &Catalog) -> ProductDescriptor {
    let lower = fold_lower(raw_name);
    let matched = match_form(raw_name);

    let category = detect_category(&lower, &matched, catalog);
    let model = detect_model(&matched, catalog);
    let (model_key, base_depth_cm) = match model {
        Some(m) => (m.key.clone(), m.depth_cm),
        None => (
            catalog.default_model.key.clone(),
            catalog.default_model.depth_cm,
        ),
    };

    let recognized = category == Category::TowelWarmer
        || model.is_some()
        || catalog
            .radiator_keywords
            .iter()
            .any(|k| lower.contains(&fold_lower(k)));

    let dimensions = scan_dimensions(raw_name);
    let color = detect_color(&matched, catalog).unwrap_or_default();
    let short_label = short_label(&model_key, dimensions.as_ref(), &color);

    debug!(
        "Interpreted '{}': {:?} model={} dims={:?} color='{}'",
        raw_name, category, model_key, dimensions, color
    );

    ProductDescriptor {
        raw_name: raw_name.to_string(),
        category,
        display_model_name: catalog.display_name(&model_key),
        model_key,
        base_depth_cm,
        dimensions,
        color,
        explicit_segments: scan_segment_count(&matched),
        recognized,
        short_label,
    }
}

/// Towel warmer when a towel keyword or a towel-only model appears.
fn detect_category(lower: &str, matched: &str, catalog: &Catalog) -> Category {
    let keyword = catalog
        .towel_warmer_keywords
        .iter()
        .any(|k| lower.contains(&fold_lower(k)));
    let towel_model = catalog
        .towel_warmer_models
        .iter()
        .any(|m| matched.contains(&match_form(m)));

    if keyword || towel_model {
        Category::TowelWarmer
    } else {
        Category::Radiator
    }
}

fn detect_model<'a>(matched: &str, catalog: &'a Catalog) -> Option<&'a ModelDepth> {
    catalog
        .models
        .iter()
        .find(|m| matched.contains(&match_form(&m.key)))
}

fn detect_color(matched: &str, catalog: &Catalog) -> Option<String> {
    catalog
        .colors
        .iter()
        .find(|c| matched.contains(&match_form(c)))
        .cloned()
}

/// Find the first `digits [/xX] digits` pattern. Spaces may surround the separator.
pub fn scan_dimensions(text: &str) -> Option<RawDimensions> {
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let (first, after_first) = take_digits(&chars, i);
        let mut j = skip_whitespace(&chars, after_first);
        if j < chars.len() && matches!(chars[j], '/' | 'x' | 'X') {
            j = skip_whitespace(&chars, j + 1);
            if j < chars.len() && chars[j].is_ascii_digit() {
                let (second, _) = take_digits(&chars, j);
                if let (Some(w), Some(h)) = (first, second) {
                    return Some(RawDimensions::new(w, h));
                }
            }
        }
        i = after_first;
    }

    None
}

/// Find an explicit `<N> DILIM` segment count in a match-form name.
pub fn scan_segment_count(matched: &str) -> Option<u32> {
    matched.match_indices(SEGMENT_TOKEN).find_map(|(idx, _)| {
        let before = matched[..idx].trim_end();
        let digits: String = before
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_digit())
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        digits.parse::<u32>().ok().filter(|&n| n > 0)
    })
}

/// Abbreviated label: `"{MODEL} {W}/{H} {COLOR}"`, empty parts dropped.
///
/// Model keys are plain ASCII identifiers, so the generic uppercase is used.
pub fn short_label(model_key: &str, dimensions: Option<&RawDimensions>, color: &str) -> String {
    let dims = dimensions.map(RawDimensions::label).unwrap_or_default();
    [model_key.to_uppercase(), dims, color.to_string()]
        .iter()
        .flat_map(|part| part.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

fn take_digits(chars: &[char], start: usize) -> (Option<u32>, usize) {
    let end = chars[start..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(chars.len(), |p| start + p);
    let digits: String = chars[start..end].iter().collect();
    (digits.parse().ok(), end)
}

fn skip_whitespace(chars: &[char], start: usize) -> usize {
    chars[start..]
        .iter()
        .position(|c| !c.is_whitespace())
        .map_or(chars.len(), |p| start + p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::default()
    }

    // ==================== scan_dimensions tests ====================

    #[test]
    fn test_scan_slash() {
        assert_eq!(
            scan_dimensions("NIRVANA 500/1270 BEYAZ"),
            Some(RawDimensions::new(500, 1270))
        );
    }

    #[test]
    fn test_scan_x_separators() {
        assert_eq!(scan_dimensions("PRAG 600x1000"), Some(RawDimensions::new(600, 1000)));
        assert_eq!(scan_dimensions("PRAG 600X1000"), Some(RawDimensions::new(600, 1000)));
        assert_eq!(scan_dimensions("PRAG 600 x1000"), Some(RawDimensions::new(600, 1000)));
        assert_eq!(scan_dimensions("PRAG 600 / 1000"), Some(RawDimensions::new(600, 1000)));
    }

    #[test]
    fn test_scan_first_match_wins() {
        assert_eq!(
            scan_dimensions("12 DILIM 500/700 (eski 400/600)"),
            Some(RawDimensions::new(500, 700))
        );
    }

    #[test]
    fn test_scan_no_pattern() {
        assert_eq!(scan_dimensions("TERMOSTATİK VANA"), None);
        assert_eq!(scan_dimensions("5 XL KUTU"), None);
        assert_eq!(scan_dimensions("500/"), None);
    }

    // ==================== scan_segment_count tests ====================

    #[test]
    fn test_segment_count() {
        assert_eq!(scan_segment_count("NIRVANA 500/1270 10 DILIM"), Some(10));
        assert_eq!(scan_segment_count("NIRVANA 8DILIM"), Some(8));
        assert_eq!(scan_segment_count("NIRVANA DILIM"), None);
        assert_eq!(scan_segment_count("NIRVANA 500/1270"), None);
    }

    #[test]
    fn test_segment_count_after_folding() {
        assert_eq!(scan_segment_count(&match_form("akasya 6 dilim")), Some(6));
        assert_eq!(scan_segment_count(&match_form("AKASYA 6 DİLİM")), Some(6));
    }

    // ==================== interpret tests ====================

    #[test]
    fn test_interpret_nirvana() {
        let d = interpret("NIRVANA 500/1270 BEYAZ", &catalog());
        assert_eq!(d.category, Category::Radiator);
        assert_eq!(d.model_key, "nirvana");
        assert_eq!(d.display_model_name, "Nirvana");
        assert_eq!(d.base_depth_cm, 5.0);
        assert_eq!(d.dimensions, Some(RawDimensions::new(500, 1270)));
        assert_eq!(d.color, "BEYAZ");
        assert!(d.recognized);
        assert_eq!(d.short_label, "NIRVANA 500/1270 BEYAZ");
    }

    #[test]
    fn test_interpret_havlupan_keyword() {
        let d = interpret("Prag Havlupan 500/800 Krom", &catalog());
        assert_eq!(d.category, Category::TowelWarmer);
        assert_eq!(d.model_key, "prag");
        assert_eq!(d.color, "KROM");
    }

    #[test]
    fn test_interpret_towel_only_model_without_keyword() {
        let d = interpret("YONCA 500/1000 BEYAZ", &catalog());
        assert_eq!(d.category, Category::TowelWarmer);
        assert_eq!(d.model_key, "yonca");
    }

    #[test]
    fn test_interpret_unknown_model_defaults() {
        let d = interpret("PANEL RADYATÖR 600/1000", &catalog());
        assert_eq!(d.category, Category::Radiator);
        assert_eq!(d.model_key, "standart");
        assert_eq!(d.base_depth_cm, 4.5);
        assert!(d.recognized);
        assert_eq!(d.short_label, "STANDART 600/1000");
    }

    #[test]
    fn test_interpret_accessory_not_recognized() {
        let d = interpret("TERMOSTATİK VANA", &catalog());
        assert!(!d.recognized);
        assert!(!d.has_dimensions());
    }

    #[test]
    fn test_interpret_livera_display_name() {
        let d = interpret("LIVERA 600/800 ANTRASİT", &catalog());
        assert_eq!(d.model_key, "livera");
        assert_eq!(d.display_model_name, "Livara");
        assert_eq!(d.color, "ANTRASİT");
    }

    #[test]
    fn test_interpret_model_order_is_first_match() {
        let d = interpret("NIRVANA PRAG 600/1000", &catalog());
        assert_eq!(d.model_key, "nirvana");
        let d = interpret("PRAG NIRVANA 600/1000", &catalog());
        assert_eq!(d.model_key, "nirvana");
    }

    #[test]
    fn test_interpret_dotless_capital_matches_accented() {
        let dotless = interpret("LIZYANTUS 600/1000 GRI", &catalog());
        let accented = interpret("LİZYANTUS 600/1000 GRİ", &catalog());
        let lower = interpret("lizyantus 600/1000 gri", &catalog());

        for d in [&dotless, &accented, &lower] {
            assert_eq!(d.model_key, "lizyantus");
            assert_eq!(d.color, "GRİ");
        }
        assert_eq!(dotless.short_label, accented.short_label);
    }

    #[test]
    fn test_interpret_siyah_spellings() {
        assert_eq!(interpret("PRAG 600/1000 SIYAH", &catalog()).color, "SİYAH");
        assert_eq!(interpret("PRAG 600/1000 siyah", &catalog()).color, "SİYAH");
    }

    #[test]
    fn test_short_label_trims_empty_parts() {
        assert_eq!(short_label("prag", None, ""), "PRAG");
        assert_eq!(
            short_label("prag", Some(&RawDimensions::new(600, 1000)), ""),
            "PRAG 600/1000"
        );
    }

    #[test]
    fn test_short_label_uses_undivided_numbers_for_x_pattern() {
        let d = interpret("ZENITH 450x900 KREM", &catalog());
        assert_eq!(d.short_label, "ZENITH 450/900 KREM");
    }
}
