//! Demo dataset loaded into a fresh session.

use tracing::info;

use propdocs_core::error::AppError;
use propdocs_core::result::AppResult;
use propdocs_core::types::{FolderId, TagId};
use propdocs_entity::file::{File, RawUpload};
use propdocs_entity::folder::{EntityKind, Folder, SystemFolder};
use propdocs_entity::tag::TagColor;

use crate::DocumentStore;

/// Builds a session pre-populated with a small property portfolio.
pub fn demo() -> AppResult<DocumentStore> {
    let mut store = DocumentStore::new();

    let lease = store.tags.add_tag_with_color("Lease", TagColor::Blue)?.id;
    let invoice = store.tags.add_tag_with_color("Invoice", TagColor::Green)?.id;
    let inspection = store.tags.add_tag_with_color("Inspection", TagColor::Amber)?.id;
    let tax = store.tags.add_tag_with_color("Tax", TagColor::Red)?.id;

    let properties = root(&store, SystemFolder::Properties)?;
    let people = root(&store, SystemFolder::People)?;
    let shared = root(&store, SystemFolder::Shared)?;

    let main_st = add(
        &mut store,
        Folder::new("123 Main St", Some(properties)).with_entity(EntityKind::Property, "prop-1"),
    )?;
    let main_leases = add(&mut store, Folder::new("Leases", Some(main_st)))?;
    let main_inspections = add(&mut store, Folder::new("Inspections", Some(main_st)))?;
    let oak_ave = add(
        &mut store,
        Folder::new("45 Oak Ave", Some(properties)).with_entity(EntityKind::Property, "prop-2"),
    )?;
    let cooper = add(
        &mut store,
        Folder::new("Jane Cooper", Some(people)).with_entity(EntityKind::Owner, "owner-1"),
    )?;
    let lee = add(
        &mut store,
        Folder::new("Marcus Lee", Some(people)).with_entity(EntityKind::Tenant, "tenant-1"),
    )?;
    let acme = add(
        &mut store,
        Folder::new("Acme Plumbing", Some(people)).with_entity(EntityKind::Vendor, "vendor-1"),
    )?;
    let templates = add(&mut store, Folder::new("Templates", Some(shared)))?;

    let seed_files: [(&str, u64, &str, FolderId, &[TagId]); 10] = [
        ("Lease Agreement - Unit A.pdf", 482_113, "application/pdf", main_leases, &[lease]),
        ("Lease Renewal 2024.docx", 61_440, DOCX, main_leases, &[lease]),
        ("Move-in Inspection.pdf", 1_204_332, "application/pdf", main_inspections, &[inspection]),
        ("Kitchen Photo.jpg", 2_811_904, "image/jpeg", main_inspections, &[inspection]),
        ("Property Tax 2023.pdf", 98_304, "application/pdf", main_st, &[tax]),
        ("Exterior.png", 3_145_728, "image/png", oak_ave, &[]),
        ("Owner Statement Q1.xls", 24_576, XLS, cooper, &[invoice]),
        ("Renter Insurance.pdf", 157_286, "application/pdf", lee, &[]),
        ("Invoice 1042.pdf", 45_056, "application/pdf", acme, &[invoice]),
        ("Lease Template.docx", 38_912, DOCX, templates, &[lease]),
    ];

    for (name, size, mime, folder_id, tags) in seed_files {
        store
            .files
            .insert(File::from_upload(RawUpload::new(name, size, mime), folder_id, tags.to_vec()))?;
    }

    info!(
        folders = store.folders.len(),
        files = store.files.len(),
        tags = store.tags.len(),
        "Seeded demo document store"
    );

    Ok(store)
}

const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const XLS: &str = "application/vnd.ms-excel";

fn root(store: &DocumentStore, kind: SystemFolder) -> AppResult<FolderId> {
    store
        .folders
        .system_folder(kind)
        .map(|f| f.id)
        .ok_or_else(|| AppError::internal(format!("System folder '{}' missing", kind.name())))
}

fn add(store: &mut DocumentStore, folder: Folder) -> AppResult<FolderId> {
    let id = folder.id;
    store.folders.insert(folder)?;
    Ok(id)
}
