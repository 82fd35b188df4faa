use vitae_core::{Document, EducationEntry, TemplateRegistry, WorkEntry};

fn sample_document(template: &str) -> Document {
    let mut document = Document::default();
    document.template = template.to_string();
    document.color = "#10b981".to_string();
    document.full_name = "Ada Lovelace".to_string();
    document.job_title = "Analyst".to_string();
    document.email = "ada@example.com".to_string();
    document.phone = "+44 1".to_string();
    document.location = "London".to_string();
    document.website = "example.com/ada".to_string();
    document.summary = "First programmer.".to_string();
    document.skills = "Mathematics, Notes; Engines".to_string();
    document.work.push(WorkEntry {
        title: "Collaborator".to_string(),
        company: "Analytical Engine".to_string(),
        start_date: "1842".to_string(),
        end_date: "1843".to_string(),
        description: "Wrote the first published program.".to_string(),
    });
    document.education.push(EducationEntry {
        school: "Private tutors".to_string(),
        degree: "Mathematics".to_string(),
        grad_date: "1835".to_string(),
    });
    document
}

#[test]
fn rendering_is_pure_for_fixed_inputs() {
    let registry = TemplateRegistry::with_builtins();
    for id in ["modern", "classic", "minimal"] {
        let document = sample_document(id);
        let first = registry.render(&document);
        let second = registry.render(&document);
        assert_eq!(first, second, "template `{id}` must be deterministic");
    }
}

#[test]
fn unknown_template_renders_like_the_default() {
    let registry = TemplateRegistry::with_builtins();
    let mut document = sample_document("modern");
    let default_markup = registry.render(&document);

    document.template = "brutalist".to_string();
    assert_eq!(registry.render(&document), default_markup);
    assert_eq!(registry.default_id(), "modern");
}

#[test]
fn every_scalar_field_reaches_the_markup() {
    let registry = TemplateRegistry::with_builtins();
    for id in ["modern", "classic", "minimal"] {
        let document = sample_document(id);
        let markup = registry.render(&document);
        for expected in [
            "Ada Lovelace",
            "Analyst",
            "ada@example.com",
            "+44 1",
            "London",
            "example.com/ada",
            "First programmer.",
            "Mathematics",
            "Collaborator",
            "Analytical Engine",
            "1842",
            "Private tutors",
            "1835",
            "#10b981",
        ] {
            assert!(markup.contains(expected), "template `{id}` misses {expected}");
        }
    }
}

#[test]
fn entries_render_in_array_order() {
    let registry = TemplateRegistry::with_builtins();
    let mut document = sample_document("modern");
    document.work.push(WorkEntry {
        title: "Zzz Later Role".to_string(),
        ..WorkEntry::default()
    });

    let markup = registry.render(&document);
    let first = markup.find("Collaborator").unwrap();
    let second = markup.find("Zzz Later Role").unwrap();
    assert!(first < second);
}

#[test]
fn empty_document_renders_without_error() {
    let registry = TemplateRegistry::with_builtins();
    for id in ["modern", "classic", "minimal"] {
        let mut document = Document::default();
        document.template = id.to_string();
        let markup = registry.render(&document);
        assert!(markup.starts_with("<div class=\"resume"));
    }
}

#[test]
fn field_text_is_escaped() {
    let registry = TemplateRegistry::with_builtins();
    let mut document = Document::default();
    document.full_name = "<script>alert(1)</script>".to_string();

    let markup = registry.render(&document);
    assert!(!markup.contains("<script>"));
    assert!(markup.contains("&lt;script&gt;"));
}

#[test]
fn custom_registrations_replace_and_extend() {
    fn stub(_document: &Document, _accent: &str) -> String {
        "stub".to_string()
    }

    let mut registry = TemplateRegistry::with_builtins();
    registry.register("stub", stub);
    assert!(registry.ids().contains(&"stub"));

    let mut document = Document::default();
    document.template = "stub".to_string();
    assert_eq!(registry.render(&document), "stub");
}
