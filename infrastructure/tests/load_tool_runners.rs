//! End-to-end loading of runner elements from XML

use std::sync::Arc;
use toolrunner_application::{LoadToolRunnersError, LoadToolRunnersUseCase, TranslationConfig};
use toolrunner_domain::{ConfigurationError, ParsedDefinition, ToolSource};
use toolrunner_infrastructure::{SubElementParser, XmlDocumentSource};

const JOBS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<beans xmlns="http://www.springframework.org/schema/beans"
       xmlns:hdp="http://www.springframework.org/schema/hadoop">

    <hdp:tool-runner id="by-ref" tool-ref="myTool">
        <hdp:arg value="-input"/>
        <hdp:arg value="  /data  "/>
    </hdp:tool-runner>

    <hdp:tool-runner id="by-class" tool-class="org.example.WordCount"/>

    <hdp:tool-runner id="nested">
        <hdp:arg value="-Dmapred.reduce.tasks=4"/>
        <bean class="org.example.WordCount">
            <property name="conf" ref="hadoopConfiguration"/>
        </bean>
    </hdp:tool-runner>

    <hdp:tool-runner id="conflict" tool-class="org.example.WordCount">
        <bean class="org.example.Other"/>
    </hdp:tool-runner>
</beans>"#;

fn use_case(config: &TranslationConfig) -> LoadToolRunnersUseCase {
    LoadToolRunnersUseCase::new(
        Arc::new(XmlDocumentSource::new()),
        Arc::new(SubElementParser::new()),
        config,
    )
}

#[test]
fn translates_every_runner_shape() {
    let output = use_case(&TranslationConfig::default().keep_going())
        .execute_source(JOBS, "jobs.xml")
        .unwrap();

    assert_eq!(output.runners.len(), 3);

    let by_ref = &output.runner("by-ref").unwrap().definition;
    assert_eq!(by_ref.tool, Some(ToolSource::reference("myTool")));
    assert_eq!(by_ref.arguments, vec!["-input", "/data"]);

    let by_class = &output.runner("by-class").unwrap().definition;
    assert_eq!(by_class.tool, Some(ToolSource::class("org.example.WordCount")));
    assert!(by_class.arguments.is_empty());

    let nested = &output.runner("nested").unwrap().definition;
    assert_eq!(nested.arguments, vec!["-Dmapred.reduce.tasks=4"]);
    let Some(ToolSource::Nested { definition }) = &nested.tool else {
        panic!("expected nested tool, got {:?}", nested.tool);
    };
    let bean = definition.as_bean().unwrap();
    assert_eq!(bean.class.as_deref(), Some("org.example.WordCount"));
    assert_eq!(
        bean.property("conf"),
        Some(&ParsedDefinition::Reference("hadoopConfiguration".to_string()))
    );

    assert_eq!(output.failures.len(), 1);
    let failure = &output.failures[0];
    assert!(matches!(
        failure,
        ConfigurationError::ConflictingToolDefinition { .. }
    ));
    assert_eq!(failure.element().id.as_deref(), Some("conflict"));
    assert_eq!(failure.element().position.map(|p| p.line), Some(19));
}

#[test]
fn fail_fast_reports_conflict() {
    let error = use_case(&TranslationConfig::default())
        .execute_source(JOBS, "jobs.xml")
        .unwrap_err();
    match error {
        LoadToolRunnersError::Configuration { source, .. } => assert!(source.is_conflict()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_runner_has_no_tool_and_no_arguments() {
    let output = use_case(&TranslationConfig::default())
        .execute_source("<tool-runner/>", "inline.xml")
        .unwrap();
    assert_eq!(output.runners.len(), 1);
    assert_eq!(output.runners[0].definition.tool, None);
    assert!(output.runners[0].definition.arguments.is_empty());
}
