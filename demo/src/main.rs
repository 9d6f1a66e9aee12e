//! dr-ai consultation core demo CLI
//!
//! Drives the mocked chat, diagnosis, profile and home services from the
//! command line.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- ask "من سردرد دارم"
//!   cargo run -p demo -- quick q1
//!   cargo run -p demo -- diagnosis --json
//!   cargo run -p demo -- --rules my-rules.toml ask "flu"

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use drai_contracts::error::{DrAiError, DrAiResult};
use drai_core::{
    format::{probability_color, severity_label, to_persian_digits},
    Responder,
};
use drai_keywords::TomlKeywordEngine;
use drai_ref_mock::services::{
    chat::{ChatService, SpeechTranscriber},
    diagnosis::{schedule_appointment, DiagnosisService},
    home,
    profile::ProfileStore,
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// dr-ai: mocked AI doctor consultation demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "dr-ai consultation core demo",
    long_about = "Exercises the dr-ai mocked services: keyword-matched chat replies,\n\
                  diagnosis confidence, condition details, profile and home data."
)]
struct Cli {
    /// Keyword rule table to use instead of the built-in one.
    #[arg(long, global = true, value_name = "PATH")]
    rules: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every demo below in sequence.
    RunAll,
    /// Ask the AI doctor a free-text question.
    Ask { text: String },
    /// Press a quick-question button (q1..q4).
    Quick { id: String },
    /// Dictate a question through the mocked speech recognizer.
    Listen,
    /// Show the diagnosis result and overall confidence.
    Diagnosis,
    /// Show details for one condition (e.g. condition_1).
    Condition { id: String },
    /// Book a doctor appointment for tomorrow.
    Appointment { specialty: Option<String> },
    /// Show the user profile.
    Profile,
    /// Show home-screen data.
    Home,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> DrAiResult<()> {
    let engine = match &cli.rules {
        Some(path) => TomlKeywordEngine::from_file(path)?,
        None => TomlKeywordEngine::with_default_rules()?,
    };
    info!(rules = engine.table().rules.len(), "keyword engine ready");

    let out = Output { json: cli.json };

    match &cli.command {
        Command::RunAll => run_all(engine, out),
        Command::Ask { text } => ask(engine, text, out),
        Command::Quick { id } => quick(engine, id, out),
        Command::Listen => listen(engine, out),
        Command::Diagnosis => diagnosis(out),
        Command::Condition { id } => condition(id, out),
        Command::Appointment { specialty } => appointment(specialty.as_deref(), out),
        Command::Profile => profile(out),
        Command::Home => home_screen(out),
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
struct Output {
    json: bool,
}

impl Output {
    /// Print `value` as pretty JSON when `--json` is set, otherwise run the
    /// plain-text renderer.
    fn emit<T: Serialize>(self, value: &T, plain: impl FnOnce(&T)) -> DrAiResult<()> {
        if self.json {
            let rendered =
                serde_json::to_string_pretty(value).map_err(|e| DrAiError::StateError {
                    reason: format!("failed to render JSON: {}", e),
                })?;
            println!("{}", rendered);
        } else {
            plain(value);
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct Exchange<'a> {
    question: &'a str,
    category: drai_contracts::response::ResponseCategory,
    reply: &'a str,
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_all(engine: TomlKeywordEngine, out: Output) -> DrAiResult<()> {
    println!("=== Chat ===");
    let chat = ChatService::new(Box::new(engine.clone()));
    chat.welcome()?;
    for id in ["q1", "q2", "q3", "q4", "q5"] {
        chat.ask_quick(id)?;
    }
    chat.ask("unrelated text")?;
    for group in chat.transcript().groups()? {
        println!("  [{}]", group.date);
        for message in group.messages {
            println!(
                "  {} {:?}: {}",
                message.formatted_time.unwrap_or_default(),
                message.sender,
                message.text.unwrap_or_default()
            );
        }
    }
    println!();

    println!("=== Listen ===");
    listen(engine, out)?;
    println!();

    println!("=== Diagnosis ===");
    diagnosis(out)?;
    println!();

    println!("=== Condition ===");
    condition("condition_1", out)?;
    println!();

    println!("=== Appointment ===");
    appointment(None, out)?;
    println!();

    println!("=== Profile ===");
    profile(out)?;
    println!();

    println!("=== Home ===");
    home_screen(out)
}

fn ask(engine: TomlKeywordEngine, text: &str, out: Output) -> DrAiResult<()> {
    let exchange = Exchange {
        question: text,
        category: engine.classify(text),
        reply: engine.respond(text),
    };
    out.emit(&exchange, print_exchange)
}

fn quick(engine: TomlKeywordEngine, id: &str, out: Output) -> DrAiResult<()> {
    let chat = ChatService::new(Box::new(engine.clone()));
    let reply = chat.ask_quick(id)?;
    let question = chat
        .transcript()
        .messages()?
        .into_iter()
        .next()
        .and_then(|m| m.text)
        .unwrap_or_default();

    let exchange = Exchange {
        question: &question,
        category: engine.classify_quick(id),
        reply,
    };
    out.emit(&exchange, print_exchange)
}

fn listen(engine: TomlKeywordEngine, out: Output) -> DrAiResult<()> {
    let heard = SpeechTranscriber::new().transcribe();
    ask(engine, heard, out)
}

fn print_exchange(exchange: &Exchange<'_>) {
    println!("  You:       {}", exchange.question);
    println!("  Category:  {:?}", exchange.category);
    println!("  Dr. AI:    {}", exchange.reply);
}

fn diagnosis(out: Output) -> DrAiResult<()> {
    let results = DiagnosisService::sample().results();
    out.emit(&results, |r| {
        println!("  Diagnosis id:        {}", r.diagnosis_id);
        println!(
            "  Overall confidence:  {}% ({}٪)",
            r.overall_confidence,
            to_persian_digits(r.overall_confidence)
        );
        for c in &r.conditions {
            println!(
                "  {:>3}%  {}  {}  [{}]",
                c.probability,
                probability_color(c.probability),
                c.name,
                severity_label(c.severity)
            );
        }
        println!("  Symptoms:   {}", r.symptoms.len());
        println!("  Treatments: {}", r.treatments.len());
    })
}

fn condition(id: &str, out: Output) -> DrAiResult<()> {
    let details = DiagnosisService::sample().condition_details(id)?;
    out.emit(&details, |d| {
        println!("  {} ({}%)", d.condition.name, d.condition.probability);
        println!("  {}", d.condition.description);
        println!("  Prevalence:        {}", d.additional_info.prevalence);
        println!("  Typical duration:  {}", d.additional_info.typical_duration);
        println!("  Contagious:        {}", d.additional_info.contagious);
        println!("  Tests:             {}", d.additional_info.recommended_tests.join("، "));
        for s in &d.related_symptoms {
            println!("  - symptom:   {} ({})", s.name, s.duration);
        }
        for t in &d.recommended_treatments {
            println!("  - treatment: {}", t.name);
        }
    })
}

fn appointment(specialty: Option<&str>, out: Output) -> DrAiResult<()> {
    let appointment = schedule_appointment(specialty);
    out.emit(&appointment, |a| {
        println!("  {} with {} ({})", a.appointment_id, a.doctor.name, a.doctor.specialty);
        println!("  When:   {}", a.scheduled_time.format("%Y-%m-%d %H:%M UTC"));
        println!("  Where:  {}", a.location);
        println!("  Note:   {}", a.preparation_notes);
    })
}

fn profile(out: Output) -> DrAiResult<()> {
    let store = ProfileStore::default();
    let view = store.view()?;
    out.emit(&view, |v| {
        println!("  [{}] {}", v.initials, v.name);
        if let Some(age) = v.age {
            println!("  Age:           {}", age);
        }
        println!("  Born:          {}", v.date_of_birth);
        println!("  Last checkup:  {}", v.last_checkup);
        println!("  Status:        {} ({})", v.status.text, v.status.color);
    })?;

    let history = store.medical_history()?;
    out.emit(&history, |h| {
        for entry in h {
            println!("  {}  {:<16} {}", entry.date, entry.kind, entry.notes);
        }
    })
}

fn home_screen(out: Output) -> DrAiResult<()> {
    let user = home::user_info();
    out.emit(&user, |u| {
        println!("  Welcome, {} (last consultation {})", u.name, u.last_consultation);
    })?;

    let doctors = home::recommended_doctors();
    out.emit(&doctors, |docs| {
        for d in docs {
            let status = if d.available { "available" } else { "busy" };
            println!("  {}  {}  {:.1}  {}", d.name, d.specialty, d.rating, status);
        }
    })
}
