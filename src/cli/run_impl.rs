use anyhow::{Context, Result};
use std::fs;
use std::process::ExitCode;

use crate::descriptor::{descriptor_path, load_descriptor};
use crate::formatters::{self, console};
use crate::languages::validate_language;
use crate::naming::project_name;
use crate::scaffold::create_project;
use crate::types::{ScaffoldReport, ScaffoldRequest};

use super::Args;

pub fn run_with_args(args: &Args) -> Result<ExitCode> {
    let out = console::Colors::stdout();

    if args.version {
        println!("{}", console::version_banner(&out));
        return Ok(ExitCode::SUCCESS);
    }

    let Some(req) = build_request(args)? else {
        let err = console::Colors::stderr();
        eprintln!(
            "{}\n",
            console::error(&err, "language (-lang) and name (-name) are required")
        );
        eprintln!("{}", super::command().render_help());
        return Ok(ExitCode::FAILURE);
    };

    if args.verbose > 0 {
        eprintln!("Output directory: {}", req.output.display());
        eprintln!(
            "Descriptor: {}",
            descriptor_path(&req.config_dir, &req.language.id).display()
        );
    }

    if !args.json {
        println!(
            "{}",
            console::info(
                &out,
                &format!("Loading configuration for {} project...", req.language.id)
            )
        );
    }
    let config = load_descriptor(&req.config_dir, &req.language.id)?;
    if args.verbose > 1 {
        eprintln!(
            "Descriptor metadata: name={:?}, type={:?}, version={:?}, files={}",
            config.name,
            config.kind,
            config.version,
            config.files.len()
        );
    }

    let project_dir = req.project_dir();
    if !args.json {
        println!("\n{}", console::section(&out, "Creating project structure..."));
    }
    create_project(&project_dir, &config, |entry| {
        if !args.json {
            println!("{}", console::created_entry(&out, entry));
        }
    })?;

    let report = ScaffoldReport::new(&req, &config);
    if args.json {
        println!("{}", formatters::json::format(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "\n{}",
        console::success(
            &out,
            &format!(
                "Successfully created {} project: {}",
                req.language.id, req.name
            )
        )
    );
    println!("{}", console::location(&out, &report.location));
    if let Some(steps) = console::next_steps(&out, &config) {
        println!("\n{steps}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Validates the flags into a request. `Ok(None)` means a required flag is missing.
fn build_request(args: &Args) -> Result<Option<ScaffoldRequest>> {
    let (Some(lang), Some(raw_name)) = (
        non_empty(args.lang.as_deref()),
        non_empty(args.name.as_deref()),
    ) else {
        return Ok(None);
    };

    let name = project_name(raw_name)?;
    let language = validate_language(lang)?;

    fs::create_dir_all(&args.output).with_context(|| {
        format!(
            "failed to create output directory {}",
            args.output.display()
        )
    })?;

    Ok(Some(ScaffoldRequest {
        language,
        project_type: args.project_type.clone(),
        name,
        output: args.output.clone(),
        config_dir: args.config_dir.clone(),
    }))
}

fn non_empty(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.is_empty())
}
