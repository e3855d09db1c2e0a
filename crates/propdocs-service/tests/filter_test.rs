//! Integration tests for the filtered file list.

mod helpers;

use propdocs_entity::file::{FileType, RawUpload};
use propdocs_entity::folder::SystemFolder;
use propdocs_entity::tag::TagColor;
use propdocs_service::{TagFilter, TypeFilter, ViewMode};

fn names(app: &helpers::TestApp) -> Vec<String> {
    app.manager.folder_files().iter().map(|f| f.name.clone()).collect()
}

#[test]
fn test_filter_composition() {
    let mut app = helpers::TestApp::empty();
    let shared = app.root(SystemFolder::Shared);
    let t1 = app.manager.add_tag_with_color("Signed", TagColor::Blue).unwrap().id;
    let folder = app.manager.create_folder("Unit 4", Some(shared)).unwrap().id;
    app.manager
        .upload_files(vec![RawUpload::new("Lease.pdf", 10, "application/pdf")], folder, &[t1])
        .unwrap();
    app.manager
        .upload_files(vec![RawUpload::new("Photo.jpg", 10, "image/jpeg")], folder, &[])
        .unwrap();

    app.manager.select_folder(Some(folder)).unwrap();
    app.manager.set_search("lease");
    assert_eq!(names(&app), vec!["Lease.pdf"]);

    app.manager.set_tag_filter(TagFilter::Tag(t1)).unwrap();
    assert_eq!(names(&app), vec!["Lease.pdf"]);

    app.manager.set_type_filter(TypeFilter::Type(FileType::Image));
    assert!(names(&app).is_empty());

    app.manager.clear_filters();
    assert_eq!(names(&app), vec!["Lease.pdf", "Photo.jpg"]);
}

#[test]
fn test_list_is_folder_scoped() {
    let mut app = helpers::TestApp::seeded();
    let main_st = app.folder("Properties/123 Main St");
    app.manager.select_folder(Some(main_st)).unwrap();
    assert_eq!(names(&app), vec!["Property Tax 2023.pdf"]);

    app.manager.select_folder(None).unwrap();
    assert!(names(&app).is_empty());
}

#[test]
fn test_delete_tag_leaves_remaining_tags() {
    let mut app = helpers::TestApp::seeded();
    let leases = app.folder("Properties/123 Main St/Leases");
    let t = app.tag("Lease");
    let u = app.tag("Tax");
    let x = app.manager.files().in_folder(leases).next().unwrap().id;
    app.manager.update_file_tags(x, &[t, u]).unwrap();

    app.manager.delete_tag(t).unwrap();
    assert_eq!(app.manager.files().get(x).unwrap().tags, vec![u]);
    assert!(!app.manager.tags().contains(t));
}

#[test]
fn test_view_mode_does_not_change_results() {
    let mut app = helpers::TestApp::seeded();
    let inspections = app.folder("Properties/123 Main St/Inspections");
    app.manager.select_folder(Some(inspections)).unwrap();
    let grid = names(&app);
    app.manager.set_view_mode(ViewMode::List);
    assert_eq!(app.manager.view().mode, ViewMode::List);
    assert_eq!(names(&app), grid);
}
