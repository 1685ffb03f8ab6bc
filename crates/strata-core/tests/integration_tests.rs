//! Integration tests for strata-core's public generation API.

use std::path::Path;

use strata_core::{
    domain::{DomainError, Fragment},
    prelude::*,
};

#[test]
fn every_level_generates_wrapper_without_children() {
    let scaffolder = ComponentScaffolder::default();

    for level in DesignLevel::ALL {
        for name in ["Button", "CourseCard", "hero_banner"] {
            let spec = ComponentSpec::new(name, level);
            let artifacts = scaffolder.generate(&spec).unwrap();
            assert_eq!(
                artifacts.template_content(),
                format!("<div class=\"{}\">{{{{ text }}}}</div>\n", name.to_lowercase())
            );
            assert_eq!(artifacts.data_content(), "text: 'Hello World'\n");
        }
    }
}

#[test]
fn include_count_and_order_match_children() {
    let scaffolder = ComponentScaffolder::default();
    let child_lists: [&[&str]; 3] = [
        &["Heading"],
        &["Heading", "Subheading", "TextLink"],
        &["ProgramList", "CourseCard", "FacultyProfileCard"],
    ];

    for children in child_lists {
        let spec = ComponentSpec::new("Wrapper", DesignLevel::Templates)
            .with_children(children.iter().copied());
        let artifacts = scaffolder.generate(&spec).unwrap();

        let includes: Vec<&str> = artifacts
            .template
            .document
            .fragments()
            .iter()
            .filter_map(|f| match f {
                Fragment::Include { child } => Some(child.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(includes, children);

        for (line, child) in artifacts.template_content().lines().zip(children) {
            assert_eq!(
                line,
                format!("{{% include \"@{child}/{child}.twig\" with {{ text: text }} %}}")
            );
        }
    }
}

#[test]
fn story_imports_children_after_own_files() {
    let artifacts = ComponentScaffolder::default()
        .generate_from("NameTitleBlock", "Organisms", ["Heading", "Subheading"])
        .unwrap();

    let expected = "\
import NameTitleBlock from './NameTitleBlock.twig';
import data from './NameTitleBlock.yml';
import Heading from '../../02-molecules/Heading/Heading.twig';
import Subheading from '../../02-molecules/Subheading/Subheading.twig';

export default {
  title: 'Organisms/NameTitleBlock',
};

export const Default = () => NameTitleBlock(data);
";
    assert_eq!(artifacts.story_content(), expected);
}

#[test]
fn course_card_template_lands_in_templates_directory() {
    let artifacts = ComponentScaffolder::default()
        .generate_from("CourseCard", "templates", Vec::<String>::new())
        .unwrap();
    assert_eq!(
        artifacts.output_dir(),
        Path::new("components/04-templates/CourseCard")
    );
}

#[test]
fn identical_inputs_give_identical_bytes() {
    let scaffolder = ComponentScaffolder::default();
    let run = || {
        scaffolder
            .generate_from("ContactInfo", "organisms", ["Heading", "TextLink"])
            .unwrap()
    };
    let (a, b) = (run(), run());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.content().as_bytes(), y.content().as_bytes());
    }
}

#[test]
fn invalid_level_reports_valid_choices() {
    let err = ComponentScaffolder::default()
        .generate_from("Button", "widgets", Vec::<String>::new())
        .unwrap_err();
    match err {
        DomainError::InvalidLevel { input, valid } => {
            assert_eq!(input, "widgets");
            for level in DesignLevel::ALL {
                assert!(valid.contains(level.as_str()));
            }
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
