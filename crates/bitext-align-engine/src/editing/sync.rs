use crate::editing::{Column, DisplayOrder, RenderedView};
use crate::models::AlignedDocument;

/// Pull the rendered view's text back into the model.
///
/// Each column replaces the unit sequence of the language `order` maps it to,
/// position for position. Padding cells come back as empty units, so after a sync
/// both sides have exactly `view.len()` units. Headings are not editable in the view
/// and are left alone.
pub fn sync_view_into(doc: &mut AlignedDocument, view: &RenderedView, order: DisplayOrder) {
    for column in [Column::First, Column::Second] {
        let units = view.column(column).map(str::to_string).collect();
        doc.side_mut(order.language_for(column)).units = units;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::{CellRef, UnitPair, render};
    use crate::models::{Language, LanguageSide};
    use pretty_assertions::assert_eq;

    fn doc() -> AlignedDocument {
        AlignedDocument::new(
            LanguageSide::new("শিরোনাম", vec!["এক".into(), "দুই".into()]),
            LanguageSide::new("Title", vec!["One.".into()]),
        )
    }

    #[test]
    fn test_sync_of_unchanged_view_pads_shorter_side() {
        let mut doc = doc();
        let view = render(&doc, DisplayOrder::EnFirst);

        sync_view_into(&mut doc, &view, DisplayOrder::EnFirst);

        assert_eq!(doc.en.units, vec!["One.".to_string(), String::new()]);
        assert_eq!(doc.bn.units, vec!["এক".to_string(), "দুই".to_string()]);
    }

    #[test]
    fn test_sync_maps_columns_through_order() {
        for order in [DisplayOrder::EnFirst, DisplayOrder::BnFirst] {
            let mut doc = doc();
            let mut view = render(&doc, order);
            let en_cell = CellRef::new(0, order.column_for(Language::En));
            view.set_cell(en_cell, "Edited.".into());

            sync_view_into(&mut doc, &view, order);

            assert_eq!(doc.en.units[0], "Edited.", "order {order:?}");
            assert_eq!(doc.bn.units[0], "এক", "order {order:?}");
        }
    }

    #[test]
    fn test_sync_replaces_rather_than_merges() {
        let mut doc = doc();
        let view = RenderedView {
            first_heading: "ignored".into(),
            second_heading: "ignored".into(),
            pairs: vec![UnitPair::new("Only.", "একমাত্র")],
        };

        sync_view_into(&mut doc, &view, DisplayOrder::EnFirst);

        assert_eq!(doc.en.units, vec!["Only.".to_string()]);
        assert_eq!(doc.bn.units, vec!["একমাত্র".to_string()]);
        assert_eq!(doc.en.heading, "Title");
    }
}
