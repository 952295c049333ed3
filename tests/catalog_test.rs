use anyhow::Result;
use std::fs;

use showcase_catalog::catalog::Catalog;
use showcase_catalog::gallery::Gallery;
use showcase_catalog::photos::PhotoLibrary;

#[test]
fn test_catalog_builds_and_answers_queries() -> Result<()> {
    let catalog = Catalog::load()?;

    assert_eq!(catalog.len(), 170);
    assert_eq!(catalog.days().len(), 4);

    // Every performance slot points at a scheduled show instance.
    for performer in catalog.performers() {
        for slot in &performer.performances {
            assert!(
                catalog
                    .show_slots()
                    .iter()
                    .any(|s| s.stage_id == slot.stage_id),
                "unscheduled stage id {} on {}",
                slot.stage_id,
                performer.name
            );
        }
    }

    // Day views partition the roster.
    let per_day: usize = catalog
        .days()
        .iter()
        .map(|d| catalog.performers_by_day(&d.id).len())
        .sum();
    assert_eq!(per_day, catalog.len());

    // The Pirated cast is reachable by stage and by stage+day.
    let pirated = catalog.performers_by_stage("stage-two-thursday-pirated");
    assert_eq!(pirated.len(), 13);
    assert_eq!(
        catalog
            .performers_by_stage_and_day("stage-two-thursday-pirated", "thursday-27th")
            .len(),
        13
    );

    Ok(())
}

#[test]
fn test_catalog_exports_as_json() -> Result<()> {
    let catalog = Catalog::load()?;
    let value = serde_json::to_value(&catalog)?;

    let performers = value
        .get("performers")
        .and_then(|p| p.as_array())
        .expect("performers array");
    assert_eq!(performers.len(), 170);

    let first = &performers[0];
    assert_eq!(first["name"], "Amelia Beukes");
    assert_eq!(first["commitment"], "First Year Pin June");
    assert_eq!(first["performances"][0]["stage_id"], "stage-one-monday");

    Ok(())
}

#[test]
fn test_gallery_scan_orders_and_filters() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let stageone = temp.path().join("stageone");
    fs::create_dir(&stageone)?;
    for name in ["stageone10.webp", "stageone2.webp", "stageone2 copy.webp", "notes.txt"] {
        fs::write(stageone.join(name), b"x")?;
    }

    let gallery = Gallery::scan(temp.path())?;
    let images = gallery.images("stage-one-wednesday");
    assert_eq!(images.len(), 2);
    assert!(images[0].ends_with("stageone2.webp"));
    assert!(images[1].ends_with("stageone10.webp"));

    // Unpopulated stages come back empty rather than erroring.
    assert!(gallery.images("stage-three-monday").is_empty());

    Ok(())
}

#[test]
fn test_photo_coverage_against_roster() -> Result<()> {
    let temp = tempfile::tempdir()?;
    fs::write(temp.path().join("Maggie Amarant.jpg"), b"x")?;
    fs::write(temp.path().join("Maggie Amarant.webp"), b"x")?;
    fs::write(temp.path().join("jack carter (1).png"), b"x")?;

    let library = PhotoLibrary::scan(temp.path())?;
    let catalog = Catalog::load()?;

    let maggie = catalog.performer_by_name("Maggie Amarant").unwrap();
    assert_eq!(library.photo_for(&maggie.name), Some("Maggie Amarant.webp"));

    let jack = catalog.performer_by_name("Jack Carter").unwrap();
    assert_eq!(library.photo_for(&jack.name), Some("jack carter (1).png"));

    // Skip-listed performers resolve to the placeholder without an asset.
    let charlie = catalog.performer_by_name("Charlie Flack").unwrap();
    assert_eq!(library.photo_for(&charlie.name), Some("nophoto.png"));

    Ok(())
}
