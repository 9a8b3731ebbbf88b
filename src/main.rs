//! branch-stamp binary - pull request title/body stamping

use anstream::println;
use branch_stamp::actions::{self, ActionContext};
use branch_stamp::config::Inputs;
use branch_stamp::error::Result;
use branch_stamp::matcher::{BranchNames, match_branches};
use branch_stamp::platform::GitHubService;
use branch_stamp::types::{BranchSource, PullRequestFields};
use branch_stamp::update::{FieldDecision, build_payload, execute_update, plan_update, run_outputs};
use clap::Parser;
use owo_colors::OwoColorize;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let inputs = Inputs::parse();
    if let Err(e) = run(inputs).await {
        actions::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(inputs: Inputs) -> Result<()> {
    let ctx = ActionContext::from_env()?;
    let branches = BranchNames {
        base: ctx.base_ref.clone(),
        head: ctx.head_ref.clone(),
    };
    println!("Base branch: {}", branches.base.bold());
    println!("Head branch: {}", branches.head.bold());

    let matches = match_branches(
        &inputs.base_patterns(),
        &inputs.head_patterns(),
        &branches,
        inputs.lowercase_branch,
    )?;
    if let Some(text) = matches.first(BranchSource::Base) {
        println!("Matched base branch text: {}", text.bold());
    }
    if let Some(text) = matches.first(BranchSource::Head) {
        println!("Matched head branch text: {}", text.bold());
    }

    let fields = PullRequestFields {
        title: ctx.title.clone(),
        body: ctx.body.clone(),
    };
    let plan = plan_update(
        &inputs.title_settings(),
        &inputs.body_settings(),
        &fields,
        &matches,
    );

    let outputs = run_outputs(&plan, &matches);
    actions::write_outputs(&outputs)?;

    report_decision("title", &plan.title);
    report_decision("body", &plan.body);

    let Some(payload) = build_payload(&plan) else {
        println!("{}", "Nothing to update".dimmed());
        return Ok(());
    };

    let platform = GitHubService::new(
        &inputs.repo_token,
        ctx.owner.clone(),
        ctx.repo.clone(),
        ctx.api_url.clone(),
    )?;
    execute_update(&platform, ctx.pr_number, &payload).await?;

    println!(
        "{} pull request {}/{}#{} updated",
        "✓".green(),
        ctx.owner,
        ctx.repo,
        ctx.pr_number
    );
    Ok(())
}

fn report_decision(field: &str, decision: &FieldDecision) {
    match decision {
        FieldDecision::NotConfigured => {
            println!("{}", format!("PR {field}: skipped (not configured)").dimmed());
        }
        FieldDecision::AlreadySatisfied => {
            actions::warning(&format!("No updates were made to PR {field}"));
        }
        FieldDecision::Update(text) => {
            println!("New {field}: {}", text.bold());
        }
    }
}
