// Host-side tests for the content tables and the views derived from them.

use folio_core::content::*;

#[test]
fn tables_are_populated() {
    let p = Portfolio::builtin();
    assert_eq!(p.projects.len(), 2);
    assert_eq!(p.internships.len(), 2);
    assert_eq!(p.certifications.len(), 12);
    assert_eq!(p.skills.len(), 14);
    assert!(p.skills.iter().all(|s| s.level <= 100));
    let total: usize = SkillCategory::ALL.iter().map(|c| p.skills_in(*c).count()).sum();
    assert_eq!(total, p.skills.len());
}

#[test]
fn project_filter_by_label() {
    assert_eq!(ProjectFilter::from_label("AI/Data"), Some(ProjectFilter::AiData));
    assert_eq!(ProjectFilter::from_label("Rust"), None);

    assert_eq!(filter_projects(&PROJECTS, ProjectFilter::All).len(), 2);
    let python = filter_projects(&PROJECTS, ProjectFilter::Python);
    assert_eq!(python.len(), 1);
    assert_eq!(python[0].title, "Tic-Tac-Toe Game");
    let ai = filter_projects(&PROJECTS, ProjectFilter::AiData);
    assert_eq!(ai.len(), 1);
    assert!(ai[0].upcoming);
}

#[test]
fn web_projects_only_show_under_all() {
    assert_eq!(ProjectCategory::from_label("Web"), Some(ProjectCategory::Web));
    assert!(ProjectFilter::All.matches_category(ProjectCategory::Web));
    assert!(!ProjectFilter::Python.matches_category(ProjectCategory::Web));
    assert!(!ProjectFilter::AiData.matches_category(ProjectCategory::Web));
}

#[test]
fn placeholder_seed_drops_whitespace() {
    assert_eq!(
        placeholder_image_url("Python Essentials 1"),
        "https://picsum.photos/seed/PythonEssentials1/400/300"
    );
}

#[test]
fn image_falls_back_then_gives_up() {
    assert_eq!(image_source_after_failures("Pandas", 0), ImageSource::Original);
    assert_eq!(
        image_source_after_failures("Pandas", 1),
        ImageSource::Placeholder("https://picsum.photos/seed/Pandas/400/300".into())
    );
    assert_eq!(image_source_after_failures("Pandas", 2), ImageSource::Icon);
    assert_eq!(image_source_after_failures("Pandas", 9), ImageSource::Icon);
}

#[test]
fn viewer_lookup_by_kind_and_index() {
    let cert = ViewerData::lookup("certification", 0).unwrap();
    assert_eq!(cert.title, "Oracle Foundations Associate");
    assert_eq!(cert.subtitle, "Oracle");
    assert_eq!(cert.kind, ViewerKind::Certification);
    assert_eq!(cert.tags, vec!["Oracle"]);

    let intern = ViewerData::lookup("internship", 1).unwrap();
    assert_eq!(intern.title, "Arch Technology");
    assert_eq!(intern.src, "arch1.jpeg");
    assert!(intern.description.contains("Web Development Intern"));

    assert!(ViewerData::lookup("internship", 2).is_none());
    assert!(ViewerData::lookup("award", 0).is_none());
}
