mod common;

use common::*;

#[test]
fn test_default_labels() {
    let labels = LabelSet::default();
    assert_eq!(labels.labels().len(), 4);
    assert_eq!(labels.first(), "Aortic_enlargement");
    assert_eq!(labels.class_index("Pleural_effusion"), 2);
    assert_eq!(labels.class_index("nofinding"), 3);
}

#[test]
fn test_first_label_skips_blank_entries() -> anyhow::Result<()> {
    let labels = LabelSet::parse(" , cat ,dog")?;
    assert_eq!(labels.first(), "cat");
    assert_eq!(labels.labels().len(), 2);
    Ok(())
}

#[test]
fn test_class_index_for_unknown_label() {
    let labels = labels_abcd();
    assert_eq!(labels.class_index("E"), -1);
    assert_eq!(labels.class_index("a"), -1);
    assert!(!labels.contains("E"));
}

#[test]
fn test_parse_comma_list() -> anyhow::Result<()> {
    let labels = LabelSet::parse(" cat, dog ,,bird ")?;
    assert_eq!(labels.labels(), ["cat", "dog", "bird"]);
    assert_eq!(labels.label_at(1), Some("dog"));
    assert_eq!(labels.label_at(3), None);
    assert_eq!(labels.label_at(-1), None);
    Ok(())
}

#[test]
fn test_empty_label_list_rejected() {
    assert!(LabelSet::parse("").is_err());
    assert!(LabelSet::new(Vec::<String>::new()).is_err());
}

#[test]
fn test_annotation_set_order_and_delete() {
    let mut set = AnnotationSet::new();
    assert!(set.delete_last().is_none());

    for i in 0..3 {
        set.add(BoundingBox::new(
            "A",
            Rect {
                x: i as f64,
                y: 0.0,
                width: 1.0,
                height: 1.0,
            },
        ));
    }
    assert_eq!(set.len(), 3);
    assert_eq!(set.delete_last().unwrap().x, 2.0);
    assert_eq!(set.boxes().iter().map(|b| b.x).collect::<Vec<_>>(), [0.0, 1.0]);

    set.clear();
    assert!(set.is_empty());
}

#[test]
fn test_logger_setup_is_idempotent() {
    boxlabel::logging::setup_logger(true);
    boxlabel::logging::setup_logger(false);
    log::debug!("logger installed");
}
