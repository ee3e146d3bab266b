//! Library integration tests.

use module_query::db::{Build, BuildCatalog, BuildReportRow, MemoryCatalog, SearchMode};
use module_query::report::{render_report, Layout};
use module_query::ModuleQueryError;

fn report(build_name: &str, flavor: &str) -> BuildReportRow {
    BuildReportRow {
        name: "samtools".into(),
        build_name: build_name.into(),
        build_stack_name: flavor.into(),
        build_order: None,
        report_text: serde_json::json!({
            "title": "samtools",
            "name": build_name,
            "description": "Tools for manipulating next-generation sequencing data.",
            "activation": format!("module load {build_name}"),
            "run_dependencies": ["htslib/1.10.2-fasrc01"],
            "preferred_build": false,
            "build_stack": flavor,
        })
        .to_string(),
    }
}

#[test]
fn error_types_are_public() {
    let err = ModuleQueryError::NoResults {
        search: "samtools".into(),
        flavors: vec!["Easy Build".into()],
    };
    assert!(err.to_string().contains("samtools"));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> module_query::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use module_query::cli::{CheckActivationArgs, ModuleQueryArgs};

    let args = ModuleQueryArgs::parse_from(["module-query", "--flavor", "Java", "-v", "jdk"]);
    assert_eq!(args.flavor_list(), vec!["Java"]);
    assert_eq!(args.search_mode(), SearchMode::BuildName);

    let args = CheckActivationArgs::parse_from(["check-activation", "--flavors", "Java", ""]);
    assert_eq!(args.search, "");
}

#[test]
fn single_report_renders_detail() {
    let rows = vec![report("samtools/1.10-fasrc01", "HeLmod CentOS 7")];
    let blocks = render_report(&rows, &Layout::for_columns(80)).unwrap();

    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].contains("  samtools : samtools/1.10-fasrc01"));
    assert!(blocks[0].contains("This module also loads"));
    assert!(blocks[0].contains("htslib/1.10.2-fasrc01"));
}

#[test]
fn several_reports_render_one_block_per_application() {
    let rows = vec![
        report("samtools/1.10-fasrc01", "HeLmod CentOS 7"),
        report("samtools/1.9-fasrc02", "HeLmod CentOS 7"),
    ];
    let blocks = render_report(&rows, &Layout::for_columns(80)).unwrap();

    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].contains("samtools/1.10-fasrc01"));
    assert!(blocks[0].contains("samtools/1.9-fasrc02"));
    assert!(!blocks[0].contains("denotes preferred build"));
}

#[tokio::test]
async fn memory_catalog_serves_builds() {
    let mut catalog = MemoryCatalog::with_builds(vec![Build::new("jdk/1.8", "module load jdk/1.8")]);
    let query = module_query::db::build_activation_query("jdk", &["Java".to_string()]).unwrap();

    let builds = catalog.builds(&query).await.unwrap();

    assert_eq!(builds[0].activation, "module load jdk/1.8");
}
