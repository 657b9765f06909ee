use crate::infra::{answers_from_pairs, parse_score, InMemoryScreeningRepository};
use clap::Args;
use esas_triage::error::AppError;
use esas_triage::workflows::screening::{
    knowledge, process_screening, BatchOutcome, RawAnswers, ScreeningImporter, ScreeningResult,
    ScreeningService, ScreeningServiceError,
};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// Item score as ITEM=VALUE (for example `--score 6=2`); repeat for all nine items
    #[arg(long = "score", value_parser = parse_score, required = true)]
    pub(crate) scores: Vec<(String, serde_json::Value)>,
    /// Print the result as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with patient columns and item columns 1-9
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print results as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the scenario results as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

struct DemoScenario {
    name: &'static str,
    scores: [i64; 9],
}

const DEMO_SCENARIOS: [DemoScenario; 3] = [
    DemoScenario {
        name: "Mild pain tied with mild breathlessness",
        scores: [2, 0, 0, 0, 0, 2, 0, 0, 0],
    },
    DemoScenario {
        name: "No symptoms reported",
        scores: [0; 9],
    },
    DemoScenario {
        name: "Severe pain",
        scores: [9, 0, 0, 0, 0, 0, 0, 0, 0],
    },
];

pub(crate) fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let answers = answers_from_pairs(args.scores);
    let result = process_screening(&answers).map_err(ScreeningServiceError::from)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_result(&result);
    }
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let imports = ScreeningImporter::from_path(&args.csv)?;
    let service = ScreeningService::new(Arc::new(InMemoryScreeningRepository::with_capacity(
        imports.len().max(1),
    )));
    let outcomes = service.record_batch(imports);

    if args.json {
        let rows: Vec<serde_json::Value> = outcomes.iter().map(batch_row_json).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Batch screening: {}", args.csv.display());
    for outcome in &outcomes {
        render_batch_row(outcome);
    }
    let failed = outcomes.iter().filter(|o| o.outcome.is_err()).count();
    println!(
        "\n{} row(s) screened, {} rejected",
        outcomes.len() - failed,
        failed
    );
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mut rendered = Vec::new();

    for scenario in &DEMO_SCENARIOS {
        let answers = scenario_answers(scenario.scores);
        let result = process_screening(&answers).map_err(ScreeningServiceError::from)?;

        if args.json {
            rendered.push(json!({ "scenario": scenario.name, "result": result }));
        } else {
            println!("=== {} ===", scenario.name);
            println!("Scores: {:?}", scenario.scores);
            render_result(&result);
            println!();
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    }
    Ok(())
}

fn scenario_answers(scores: [i64; 9]) -> RawAnswers {
    scores
        .iter()
        .enumerate()
        .map(|(index, score)| ((index + 1).to_string(), json!(score)))
        .collect()
}

fn render_result(result: &ScreeningResult) {
    println!(
        "Highest score: {} | Risk: {} | Primary symptom: {} ({}) | Priority: {}",
        result.highest_score,
        result.risk_level,
        result.primary_symptom_id,
        result.primary_symptom_id.label(),
        result.priority_level
    );
    println!("Action: {}", result.action_required);
    println!("Diagnosis: {}", result.diagnosis);
    println!(
        "Intervention: {} ({})",
        result.therapy_type,
        knowledge::frequency(&result.therapy_type, result.risk_level)
    );
    for (index, step) in result.intervention_steps.iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }
    if !result.references.is_empty() {
        println!("References:");
        for reference in &result.references {
            println!("  - {reference}");
        }
    }
}

fn render_batch_row(outcome: &BatchOutcome) {
    match &outcome.outcome {
        Ok(stored) => println!(
            "row {:>3} {:<24} {} risk={} primary={} priority={}",
            outcome.row,
            outcome.patient_name,
            stored.id,
            stored.result.risk_level,
            stored.result.primary_symptom_id.label(),
            stored.result.priority_level
        ),
        Err(err) => println!(
            "row {:>3} {:<24} rejected: {}",
            outcome.row, outcome.patient_name, err
        ),
    }
}

fn batch_row_json(outcome: &BatchOutcome) -> serde_json::Value {
    match &outcome.outcome {
        Ok(stored) => json!({
            "row": outcome.row,
            "patient": outcome.patient_name,
            "screening": stored,
        }),
        Err(ScreeningServiceError::Screening(error)) => json!({
            "row": outcome.row,
            "patient": outcome.patient_name,
            "errors": error.report().messages(),
        }),
        Err(other) => json!({
            "row": outcome.row,
            "patient": outcome.patient_name,
            "errors": [other.to_string()],
        }),
    }
}
