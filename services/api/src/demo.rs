use crate::infra::Board;
use clap::Args;
use jobboard::accounts::{NewUser, Role, User};
use jobboard::applications::{
    Application, ApplicationStatus, ApplicationSubmission, Resume, ResumePayload,
};
use jobboard::config::AppConfig;
use jobboard::error::AppError;
use jobboard::jobs::{Job, JobPosting, JobType, SearchCriteria};
use jobboard::moderation::Statistics;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Free-text query used for the search step.
    #[arg(long, default_value = "rust")]
    pub(crate) query: String,
    /// Resume file to upload. An inline placeholder is used when omitted.
    #[arg(long)]
    pub(crate) resume: Option<PathBuf>,
    /// Directory uploaded resumes are written to (defaults to a temp directory).
    #[arg(long)]
    pub(crate) resume_dir: Option<PathBuf>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        query,
        resume,
        resume_dir,
    } = args;

    let mut config = AppConfig::load()?;
    config.storage.resume_dir =
        resume_dir.unwrap_or_else(|| std::env::temp_dir().join("jobboard-demo"));
    let board = Board::in_memory(&config);

    println!("Job board demo");
    let employer = register(&board, "Dana Employer", "dana@northwind.test", Role::Employer)?;
    let seeker = register(&board, "Sam Seeker", "sam@example.test", Role::JobSeeker)?;
    register(&board, "Alex Admin", "alex@jobboard.test", Role::Admin)?;
    println!("Registered 3 accounts (employer {}, seeker {})", employer.id, seeker.id);

    let remote = board.jobs.create(&employer.id, remote_posting())?;
    let onsite = board.jobs.create(&employer.id, onsite_posting())?;
    println!("\nPosted jobs");
    for job in [&remote, &onsite] {
        print_job(job);
    }

    let criteria = SearchCriteria {
        text_query: Some(query.clone()),
        ..SearchCriteria::default()
    };
    let matches = board.jobs.search(&criteria)?;
    println!("\nSearch for '{query}' matched {} job(s)", matches.len());
    for job in &matches {
        print_job(job);
    }

    let payload = match resume {
        Some(path) => upload_payload(&path)?,
        None => ResumePayload::Inline("UmVzdW1lOiBTYW0gU2Vla2Vy".to_string()),
    };
    let application = board.applications.submit(
        &seeker.id,
        ApplicationSubmission {
            job_id: remote.id.clone(),
            resume: payload,
            cover_letter: Some("Keen to work on your platform team.".to_string()),
        },
    )?;
    println!("\nApplication submitted");
    print_application(&application, &config.storage.resume_dir);

    let retry = board.applications.submit(
        &seeker.id,
        ApplicationSubmission {
            job_id: remote.id.clone(),
            resume: ResumePayload::Inline("cmV0cnk=".to_string()),
            cover_letter: None,
        },
    );
    if let Err(err) = retry {
        println!("Second submission rejected: {err} ({})", err.kind().label());
    }

    println!("\nReview");
    for status in [ApplicationStatus::Reviewed, ApplicationStatus::Interview] {
        let updated = board
            .applications
            .update_status(&application.id, status, &employer.id)?;
        println!("  {} -> {}", updated.id, updated.status);
    }
    if let Err(err) =
        board
            .applications
            .update_status(&application.id, ApplicationStatus::Hired, &seeker.id)
    {
        println!("  Seeker cannot change status: {err}");
    }

    board.moderation.moderate_job(&onsite.id, false)?;
    println!("\nModeration deactivated {}", onsite.id);

    print_statistics(&board.moderation.statistics()?);
    Ok(())
}

fn register(board: &Board, name: &str, email: &str, role: Role) -> Result<User, AppError> {
    Ok(board.accounts.register(NewUser {
        name: name.to_string(),
        email: email.to_string(),
        role,
    })?)
}

fn upload_payload(path: &Path) -> Result<ResumePayload, AppError> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(ResumePayload::Upload { file_name, bytes })
}

fn remote_posting() -> JobPosting {
    JobPosting {
        title: "Senior Rust Engineer".to_string(),
        company: "Northwind Traders".to_string(),
        location: "Remote, Europe".to_string(),
        job_type: JobType::FullTime,
        description: "Build the order routing services in Rust and Postgres.".to_string(),
        salary: Some("$120k-$150k".to_string()),
        requirements: vec!["Rust".to_string(), "Distributed systems".to_string()],
        experience_level: Some("SENIOR".to_string()),
        remote: true,
        category: Some("Engineering".to_string()),
        deadline: None,
    }
}

fn onsite_posting() -> JobPosting {
    JobPosting {
        title: "Warehouse Systems Intern".to_string(),
        company: "Northwind Traders".to_string(),
        location: "Leeds, UK".to_string(),
        job_type: JobType::Internship,
        description: "Support the scanner fleet and inventory tooling.".to_string(),
        salary: None,
        requirements: Vec::new(),
        experience_level: Some("ENTRY".to_string()),
        remote: false,
        category: Some("Operations".to_string()),
        deadline: None,
    }
}

fn print_job(job: &Job) {
    println!(
        "  [{}] {} at {} ({}, {}{})",
        job.id,
        job.title,
        job.company,
        job.location,
        job.job_type.label(),
        if job.remote { ", remote" } else { "" }
    );
}

fn print_application(application: &Application, resume_dir: &Path) {
    println!(
        "  {} for {} by {}: {}",
        application.id, application.job_id, application.user_id, application.status
    );
    match &application.resume {
        Resume::Stored { reference } => {
            println!("  Resume stored at {}", resume_dir.join(reference).display())
        }
        Resume::Inline { encoded } => println!("  Resume inline ({} chars)", encoded.len()),
    }
}

fn print_statistics(stats: &Statistics) {
    println!("\nStatistics");
    println!(
        "  Users: {} ({} employers, {} job seekers)",
        stats.total_users, stats.employers, stats.job_seekers
    );
    println!("  Jobs: {} ({} active)", stats.total_jobs, stats.active_jobs);
    println!("  Applications: {}", stats.total_applications);
}
