use chrono::Local;
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skriv::clock::SystemClock;
use skriv::composition::PracticeMode;
use skriv::config::{ConfigStore, FileConfigStore};
use skriv::events::TraceEvent;
use skriv::geometry::Point;
use skriv::glyphs::GlyphLibrary;
use skriv::matcher;
use skriv::phrases::selector::{AdaptiveSelector, PhraseSelector, RandomSelector};
use skriv::phrases::PhraseSet;
use skriv::practice_log::{PracticeLog, SessionRecord};
use skriv::session::{SessionController, SessionPhase};
use skriv::stats::{CharTrace, TraceStatsDb};
use skriv::util::{mean, std_dev};
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

/// Simulated pen interval; comfortably above the match debounce.
const STEP_MS: u64 = 60;

/// handwriting tracing practice engine with a simulated pen
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Replays a simulated pen over the glyph guide paths of a letter, a \
letter pair or a sentence, driving a real tracing session end to end and printing \
the completion events a practice app would react to."
)]
struct Cli {
    /// practice mode
    #[clap(short, long, value_enum, default_value_t = ModeArg::Sentence)]
    mode: ModeArg,

    /// text to practice; picked from the phrase set when omitted
    #[clap(short, long)]
    text: Option<String>,

    /// phrase set to pull practice content from
    #[clap(short, long, value_enum, default_value_t = PhraseArg::Swedish)]
    phrases: PhraseArg,

    /// weight content toward the slowest traced characters
    #[clap(long)]
    adaptive: bool,

    /// rng seed for the simulated pen wobble
    #[clap(long)]
    seed: Option<u64>,

    /// pen wobble amplitude in canvas units
    #[clap(long, default_value_t = 18.0)]
    jitter: f64,

    /// persist this run to the stats database and the practice log
    #[clap(long)]
    record: bool,

    /// print events as json lines instead of text
    #[clap(long)]
    json: bool,
}

#[derive(Debug, Copy, Clone, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
enum ModeArg {
    Letter,
    Pair,
    Sentence,
}

impl ModeArg {
    fn to_mode(self) -> PracticeMode {
        match self {
            ModeArg::Letter => PracticeMode::SingleLetter,
            ModeArg::Pair => PracticeMode::DualCase,
            ModeArg::Sentence => PracticeMode::Sentence,
        }
    }
}

#[derive(Debug, Copy, Clone, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
enum PhraseArg {
    Swedish,
    English,
}

impl PhraseArg {
    fn as_set(self) -> PhraseSet {
        PhraseSet::load(&self.to_string().to_lowercase()).expect("embedded phrase set loads")
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let mode = cli.mode.to_mode();
    let config = FileConfigStore::new().load();

    let set = cli.phrases.as_set();
    let difficulties = if cli.adaptive {
        TraceStatsDb::new()
            .ok()
            .and_then(|db| db.get_trace_difficulties().ok())
            .unwrap_or_default()
    } else {
        HashMap::new()
    };
    let selector: Box<dyn PhraseSelector> = if cli.adaptive {
        Box::new(AdaptiveSelector)
    } else {
        Box::new(RandomSelector)
    };

    let content = match &cli.text {
        Some(text) => text.clone(),
        None => match mode {
            PracticeMode::Sentence => selector
                .pick_sentence(&set, &difficulties)
                .expect("phrase set has sentences"),
            _ => selector
                .pick_letter(&set, &difficulties)
                .expect("phrase set has letters")
                .to_string(),
        },
    };

    let library = Arc::new(GlyphLibrary::new());
    let mut session = SessionController::with_parts(
        Arc::clone(&library),
        config,
        Box::new(SystemClock::new()),
    );
    session.start(mode, &content)?;

    println!("practicing ({mode}): {content}");

    let mut rng: StdRng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let events = replay(&mut session, &mut rng, cli.jitter);

    for event in &events {
        if cli.json {
            println!("{}", serde_json::to_string(event)?);
        } else {
            print_event(event);
        }
    }

    if session.phase() != SessionPhase::Complete {
        eprintln!("session did not complete; aborting");
        std::process::exit(1);
    }

    if !cli.json {
        print_summary(&events);
    }
    if cli.record {
        record_run(&library, mode, &content, &events)?;
    }

    Ok(())
}

/// Drive the session with a wobbly pen that follows each stroke's guide
/// path point by point, lifting between strokes exactly like a real
/// tracer would.
fn replay(session: &mut SessionController, rng: &mut StdRng, jitter: f64) -> Vec<TraceEvent> {
    let mut events = Vec::new();
    let mut now_ms = 0u64;
    // Well above any realistic stroke count; guards a stalled session
    let mut remaining_strokes = 10_000;

    while session.phase() == SessionPhase::Active && remaining_strokes > 0 {
        remaining_strokes -= 1;

        let snapshot = session.snapshot().expect("active session has a snapshot");
        let points: Vec<Point> = session
            .library()
            .strokes(snapshot.character)
            .strokes()[snapshot.active_stroke_index]
            .points()
            .to_vec();
        // Resume from wherever the stroke currently is, so a move the
        // wobble happened to miss just gets picked up again.
        let progress = snapshot.stroke_progress[snapshot.active_stroke_index];
        let start_index = matcher::current_index(points.len(), progress);

        now_ms += STEP_MS;
        session.on_pointer_down_at(points[start_index], now_ms);
        for point in &points[start_index..] {
            now_ms += STEP_MS;
            let wobbled = Point::new(
                point.x + rng.gen_range(-jitter..=jitter),
                point.y + rng.gen_range(-jitter..=jitter),
            );
            events.extend(session.on_pointer_move_at(wobbled, now_ms));
            if session.phase() != SessionPhase::Active {
                break;
            }
        }
        session.on_pointer_up();
    }
    events
}

fn print_event(event: &TraceEvent) {
    match event {
        TraceEvent::CharacterCompleted {
            character,
            duration_ms,
            ..
        } => println!("  traced '{}' in {:.1}s", character, *duration_ms as f64 / 1000.0),
        TraceEvent::WordCompleted { text, .. } => println!("word done: {text}"),
        TraceEvent::SessionCompleted {
            total_duration_ms,
            mode,
        } => println!(
            "session complete ({mode}) in {:.1}s",
            *total_duration_ms as f64 / 1000.0
        ),
    }
}

fn print_summary(events: &[TraceEvent]) {
    let durations: Vec<(char, f64)> = events
        .iter()
        .filter_map(|event| match event {
            TraceEvent::CharacterCompleted {
                character,
                duration_ms,
                ..
            } => Some((*character, *duration_ms as f64)),
            _ => None,
        })
        .collect();
    if durations.is_empty() {
        return;
    }

    println!("\nslowest characters:");
    for (character, duration) in durations
        .iter()
        .sorted_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal))
        .take(5)
    {
        println!("  '{}' {:.1}s", character, duration / 1000.0);
    }

    let values: Vec<f64> = durations.iter().map(|(_, d)| *d).collect();
    if let (Some(avg), Some(spread)) = (mean(&values), std_dev(&values)) {
        println!(
            "characters: {}  avg {:.1}s  spread {:.1}s",
            values.len(),
            avg / 1000.0,
            spread / 1000.0
        );
    }
}

fn record_run(
    library: &GlyphLibrary,
    mode: PracticeMode,
    content: &str,
    events: &[TraceEvent],
) -> Result<(), Box<dyn Error>> {
    let now = Local::now();
    let traces: Vec<CharTrace> = events
        .iter()
        .filter_map(|event| match event {
            TraceEvent::CharacterCompleted {
                character,
                duration_ms,
                ..
            } => Some(CharTrace {
                character: *character,
                duration_ms: *duration_ms,
                stroke_count: library.strokes(*character).stroke_count(),
                mode: mode.to_string(),
                timestamp: now,
            }),
            _ => None,
        })
        .collect();

    let mut db = TraceStatsDb::new()?;
    db.record_traces_batch(&traces)?;

    if let Some(TraceEvent::SessionCompleted {
        total_duration_ms, ..
    }) = events.iter().find(|e| e.is_session_completed())
    {
        let record = SessionRecord {
            date: now.format("%c").to_string(),
            mode: mode.to_string(),
            content: content.to_string(),
            duration_secs: *total_duration_ms as f64 / 1000.0,
            characters: traces.len(),
        };
        PracticeLog::new().append(&record)?;
    }
    Ok(())
}
