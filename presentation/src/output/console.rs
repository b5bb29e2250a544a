//! Console output formatter for loaded runners

use colored::Colorize;
use serde_json::{Value, json};
use toolrunner_application::{LoadToolRunnersOutput, LoadedToolRunner};
use toolrunner_domain::{ParsedDefinition, ToolSource};

/// Formats load results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one document's runners as a readable listing
    pub fn format(output: &LoadToolRunnersOutput) -> String {
        let mut text = String::new();

        text.push_str(&Self::header(&output.path.display().to_string()));
        text.push('\n');

        if output.runners.is_empty() && output.failures.is_empty() {
            text.push_str(&format!("{}\n", "No runners found".dimmed()));
        }

        for runner in &output.runners {
            text.push_str(&Self::format_runner(runner));
        }

        if !output.failures.is_empty() {
            text.push_str(&format!("\n{}\n", "Failures:".red().bold()));
            for failure in &output.failures {
                text.push_str(&format!("  {} {}\n", "x".red(), failure));
            }
        }

        text
    }

    fn format_runner(runner: &LoadedToolRunner) -> String {
        let mut text = format!("\n{}\n", runner.element.to_string().yellow().bold());

        let tool = runner
            .definition
            .tool
            .as_ref()
            .map(Self::describe_tool)
            .unwrap_or_else(|| "(unset)".dimmed().to_string());
        text.push_str(&format!("  {} {}\n", "tool:".cyan(), tool));

        if runner.definition.arguments.is_empty() {
            text.push_str(&format!("  {} {}\n", "arguments:".cyan(), "(none)".dimmed()));
        } else {
            text.push_str(&format!("  {}\n", "arguments:".cyan()));
            for argument in &runner.definition.arguments {
                text.push_str(&format!("    - {:?}\n", argument));
            }
        }

        for issue in &runner.issues {
            text.push_str(&format!("  {} {}\n", "!".yellow(), issue.message));
        }

        text
    }

    /// One-line description of where a tool comes from
    pub fn describe_tool(tool: &ToolSource) -> String {
        match tool {
            ToolSource::Class { name } => format!("class {}", name),
            ToolSource::Reference { name } => format!("ref {}", name),
            ToolSource::Nested { definition } => {
                format!("nested {}", Self::describe_definition(definition))
            }
        }
    }

    fn describe_definition(definition: &ParsedDefinition) -> String {
        match definition {
            ParsedDefinition::Bean(bean) => {
                let class = bean.class.as_deref().unwrap_or("<no class>");
                match &bean.id {
                    Some(id) => format!("bean {} ({})", class, id),
                    None => format!("bean {}", class),
                }
            }
            ParsedDefinition::Reference(name) => format!("ref {}", name),
            ParsedDefinition::Value(value) => format!("value {:?}", value),
            ParsedDefinition::Null => "null".to_string(),
            ParsedDefinition::List(items) => format!("list of {}", items.len()),
        }
    }

    /// Format every document as one JSON array
    pub fn format_json(outputs: &[LoadToolRunnersOutput]) -> String {
        let documents: Vec<Value> = outputs.iter().map(Self::document_json).collect();
        serde_json::to_string_pretty(&documents).unwrap_or_else(|_| "[]".to_string())
    }

    fn document_json(output: &LoadToolRunnersOutput) -> Value {
        let runners: Vec<Value> = output
            .runners
            .iter()
            .map(|runner| {
                let issues: Vec<&str> = runner.issues.iter().map(|i| i.message.as_str()).collect();
                json!({
                    "element": runner.element,
                    "tool": runner.definition.tool,
                    "arguments": runner.definition.arguments,
                    "issues": issues,
                })
            })
            .collect();
        let failures: Vec<Value> = output
            .failures
            .iter()
            .map(|failure| {
                json!({
                    "element": failure.element(),
                    "message": failure.to_string(),
                })
            })
            .collect();

        json!({
            "path": output.path.display().to_string(),
            "runners": runners,
            "failures": failures,
        })
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}
