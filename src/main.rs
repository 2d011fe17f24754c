// SPDX-License-Identifier: MPL-2.0
use course_lens::application::port::{ContentRepository, FullscreenRefused, MediaElement};
use course_lens::application::query::{
    catalog, dashboard, CourseStats, CurriculumNavigator, CurriculumUiState, DashboardStats,
};
use course_lens::config::{self, Config};
use course_lens::content::EmbeddedContent;
use course_lens::domain::catalog::CatalogFilter;
use course_lens::domain::course::{CourseId, Lesson, LessonId, TopicId};
use course_lens::domain::video::VideoQuality;
use course_lens::i18n::I18n;
use course_lens::session::{parse_lesson_param, LearningSession, RouteResolution};
use course_lens::video_player::{
    format_time, BarGeometry, FocusTarget, Key, PlaybackSnapshot, PlayerSettings,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

const HELP: &str = "\
course-lens: browse the course catalog and replay lesson player sessions

USAGE:
  course-lens [--lang LANG] [--config-dir DIR] <COMMAND>

COMMANDS:
  catalog    [--category ID|all] [--level LEVEL|all] [--tech NAME] [--search TEXT] [--sort ORDER]
  course     <COURSE_ID>
  lesson     <COURSE_ID> [LESSON_ID]
  dashboard
  play       <COURSE_ID> [LESSON_ID] [--script FILE]

Set RUST_LOG (e.g. RUST_LOG=course_lens=debug) to see player transitions.
";

/// Scrub bar used by scripted pointer events.
const SCRIPT_BAR: BarGeometry = BarGeometry {
    left: 0.0,
    width: 600.0,
};

const DEMO_SCRIPT: &str = "\
# metadata arrives, play, then scrub around
metadata 600
key Space
time 42
hover 300
press 150
move 450
release
rate 1.5
fullscreen
move 100
wait 3
key Escape
next
metadata 300
key ArrowRight
topic 1
";

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> CliResult<()> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let config_dir: Option<PathBuf> = args.opt_value_from_str("--config-dir")?;

    let (config, warning) = config::load_with_override(config_dir);
    let i18n = I18n::new(lang, &config);
    if let Some(key) = warning {
        tracing::warn!("{}", i18n.tr(&key));
    }

    let content = EmbeddedContent::load()?;

    let Some(command) = args.subcommand()? else {
        print!("{HELP}");
        return Ok(());
    };

    match command.as_str() {
        "catalog" => {
            let mut filter = CatalogFilter::new();
            filter.sort = config.catalog.sort();
            if let Some(category) = args.opt_value_from_str("--category")? {
                filter.category = category;
            }
            if let Some(level) = args.opt_value_from_str("--level")? {
                filter.level = level;
            }
            if let Some(sort) = args.opt_value_from_str("--sort")? {
                filter.sort = sort;
            }
            filter.technology = args
                .opt_value_from_str::<_, String>("--tech")?
                .filter(|tech| !tech.eq_ignore_ascii_case("all"));
            filter.search = args.opt_value_from_str("--search")?.unwrap_or_default();
            finish(args)?;
            print_catalog(&content, &filter, &i18n);
        }
        "course" => {
            let course_id: String = args.free_from_str()?;
            finish(args)?;
            print_course(&content, &course_id, &i18n);
        }
        "lesson" => {
            let course_id: String = args.free_from_str()?;
            let lesson_id: Option<String> = args.opt_free_from_str()?;
            finish(args)?;
            print_lesson(&content, &course_id, lesson_id.as_deref(), &i18n);
        }
        "dashboard" => {
            finish(args)?;
            print_dashboard(&content, &i18n);
        }
        "play" => {
            let script_path: Option<PathBuf> = args.opt_value_from_str("--script")?;
            let course_id: String = args.free_from_str()?;
            let lesson_id: Option<String> = args.opt_free_from_str()?;
            finish(args)?;
            let script = match script_path {
                Some(path) => std::fs::read_to_string(path)?,
                None => DEMO_SCRIPT.to_string(),
            };
            let steps = parse_script(&script)?;
            play(&content, &config, &course_id, lesson_id.as_deref(), &steps, &i18n);
        }
        other => return Err(format!("unknown command: {other}").into()),
    }

    Ok(())
}

fn finish(args: pico_args::Arguments) -> CliResult<()> {
    let rest = args.finish();
    if rest.is_empty() {
        Ok(())
    } else {
        Err(format!("unexpected arguments: {rest:?}").into())
    }
}

// =============================================================================
// Read-only commands
// =============================================================================

fn print_catalog(content: &EmbeddedContent, filter: &CatalogFilter, i18n: &I18n) {
    let view = catalog::apply(content.listings(), filter);
    let total = view.total_count.to_string();
    let shown = view.len().to_string();
    println!(
        "{}",
        i18n.tr_with_args("cli-catalog-heading", &[("shown", &shown), ("total", &total)])
    );
    for listing in &view.listings {
        println!(
            "  #{:<3} {:<40} {:<22} {:<12} {:>4.1}★ {:>7} ${:.2}",
            listing.id,
            listing.title,
            listing.instructor,
            i18n.tr(listing.level.i18n_key()),
            listing.rating,
            listing.students,
            listing.price,
        );
    }
    let technologies = catalog::available_technologies(content.categories(), filter.category);
    println!(
        "{}: {}",
        i18n.tr("cli-catalog-technologies"),
        technologies.join(", ")
    );
}

fn print_course(content: &EmbeddedContent, course_param: &str, i18n: &I18n) {
    let Some(course) = course_param
        .parse::<CourseId>()
        .ok()
        .and_then(|id| content.get_course(id))
    else {
        println!("{}", i18n.tr("cli-course-not-found"));
        return;
    };

    let stats = CourseStats::for_course(course);
    println!("{} ({})", course.title, course.instructor);
    println!(
        "{}",
        i18n.tr_with_args(
            "cli-course-summary",
            &[
                ("topics", &stats.topics.to_string()),
                ("lessons", &stats.lessons.to_string()),
                ("percent", &stats.percent_complete.to_string()),
            ]
        )
    );

    let mut ui = CurriculumUiState::new();
    for topic in &course.topics {
        ui.toggle_topic_expanded(topic.id);
    }
    for topic in CurriculumNavigator::new(course).outline(None, &ui) {
        println!(
            "  {} [{}/{}] {}",
            topic.title, topic.completed, topic.total, topic.duration
        );
        for row in &topic.lessons {
            let mark = if row.lesson.completed { "x" } else { " " };
            println!(
                "    [{mark}] #{:<3} {:<45} {:<8} {}",
                row.lesson.id,
                row.lesson.title,
                i18n.tr(row.lesson.kind.i18n_key()),
                row.lesson.duration
            );
        }
    }
}

fn print_lesson(
    content: &EmbeddedContent,
    course_param: &str,
    lesson_param: Option<&str>,
    i18n: &I18n,
) {
    let Some(course) = course_param
        .parse::<CourseId>()
        .ok()
        .and_then(|id| content.get_course(id))
    else {
        println!("{}", i18n.tr("cli-course-not-found"));
        return;
    };
    let navigator = CurriculumNavigator::new(course);
    let Some(lesson) = navigator.resolve_active_lesson(parse_lesson_param(lesson_param)) else {
        println!("{}", i18n.tr("cli-nothing-playable"));
        return;
    };

    println!(
        "#{} {} ({}, {})",
        lesson.id,
        lesson.title,
        i18n.tr(lesson.kind.i18n_key()),
        lesson.duration
    );
    let info = navigator.navigation_info(lesson.id);
    if let Some(index) = info.video_index {
        println!(
            "{}",
            i18n.tr_with_args(
                "player-lesson-position",
                &[
                    ("current", &(index + 1).to_string()),
                    ("total", &info.video_count.to_string()),
                ]
            )
        );
    }
    let none = i18n.tr("cli-none");
    let label = |found: Option<&Lesson>| {
        found.map_or_else(|| none.clone(), |l| format!("#{} {}", l.id, l.title))
    };
    println!(
        "{}: {}",
        i18n.tr("cli-previous-video"),
        label(navigator.previous_video(lesson.id))
    );
    println!(
        "{}: {}",
        i18n.tr("cli-next-video"),
        label(navigator.next_video(lesson.id))
    );
}

fn print_dashboard(content: &EmbeddedContent, i18n: &I18n) {
    let enrollments = content.enrollments();
    let stats = DashboardStats::from_enrollments(enrollments);
    println!(
        "{}",
        i18n.tr_with_args(
            "cli-dashboard-summary",
            &[
                ("total", &stats.total_courses.to_string()),
                ("completed", &stats.completed.to_string()),
                ("in_progress", &stats.in_progress.to_string()),
                ("hours", &stats.total_hours.to_string()),
            ]
        )
    );
    for enrollment in dashboard::recently_accessed(enrollments) {
        let (course_id, lesson_id) = dashboard::continue_target(enrollment);
        let resume = lesson_id.map_or_else(
            || i18n.tr("cli-none"),
            |lesson| format!("{course_id}/{lesson}"),
        );
        println!(
            "  {:<40} {:>3}% {:<12} {}: {}",
            enrollment.title,
            enrollment.progress,
            i18n.tr(enrollment.status.i18n_key()),
            i18n.tr("cli-continue"),
            resume
        );
    }
}

// =============================================================================
// Scripted playback
// =============================================================================

/// One line of a player script.
#[derive(Debug, Clone, PartialEq)]
enum ScriptStep {
    Metadata(f64),
    MetadataFailed,
    Time(f64),
    Ended,
    Key(Key),
    Click(f32),
    Press(f32),
    Move(f32),
    Release,
    Hover(f32),
    Rate(f64),
    Volume(f32),
    Mute,
    Quality(VideoQuality),
    Fullscreen,
    Wait(Duration),
    Select(u32),
    Next,
    Previous,
    Topic(TopicId),
    Sidebar,
}

fn parse_script(script: &str) -> CliResult<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (index, raw) in script.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let (verb, arg) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let arg = arg.trim();
        let step = parse_step(verb, arg)
            .map_err(|err| format!("script line {}: {err}", index + 1))?;
        steps.push(step);
    }
    Ok(steps)
}

fn parse_step(verb: &str, arg: &str) -> Result<ScriptStep, String> {
    fn num<T: std::str::FromStr>(arg: &str) -> Result<T, String> {
        arg.parse().map_err(|_| format!("invalid number: {arg:?}"))
    }

    Ok(match verb {
        "metadata" => ScriptStep::Metadata(num(arg)?),
        "metadata-failed" => ScriptStep::MetadataFailed,
        "time" => ScriptStep::Time(num(arg)?),
        "ended" => ScriptStep::Ended,
        "key" => ScriptStep::Key(arg.parse()?),
        "click" => ScriptStep::Click(num(arg)?),
        "press" => ScriptStep::Press(num(arg)?),
        "move" => ScriptStep::Move(num(arg)?),
        "release" => ScriptStep::Release,
        "hover" => ScriptStep::Hover(num(arg)?),
        "rate" => ScriptStep::Rate(num(arg)?),
        "volume" => ScriptStep::Volume(num(arg)?),
        "mute" => ScriptStep::Mute,
        "quality" => ScriptStep::Quality(arg.parse()?),
        "fullscreen" => ScriptStep::Fullscreen,
        "wait" => ScriptStep::Wait(Duration::from_secs_f64(num::<f64>(arg)?.max(0.0))),
        "select" => ScriptStep::Select(num(arg)?),
        "next" => ScriptStep::Next,
        "prev" | "previous" => ScriptStep::Previous,
        "topic" => ScriptStep::Topic(num(arg)?),
        "sidebar" => ScriptStep::Sidebar,
        other => return Err(format!("unknown step: {other}")),
    })
}

/// Media element that reports commands on the log.
#[derive(Debug, Default)]
struct ConsoleMedia;

impl MediaElement for ConsoleMedia {
    fn load_source(&mut self, source: &str) {
        tracing::info!(source, "media: load");
    }
    fn unload(&mut self) {
        tracing::info!("media: unload");
    }
    fn play(&mut self) {
        tracing::info!("media: play");
    }
    fn pause(&mut self) {
        tracing::info!("media: pause");
    }
    fn set_current_time(&mut self, secs: f64) {
        tracing::info!(secs, "media: seek");
    }
    fn set_volume(&mut self, volume: f32) {
        tracing::debug!(volume, "media: volume");
    }
    fn set_muted(&mut self, muted: bool) {
        tracing::debug!(muted, "media: muted");
    }
    fn set_playback_rate(&mut self, rate: f64) {
        tracing::info!(rate, "media: rate");
    }
    fn request_fullscreen(&mut self) -> Result<(), FullscreenRefused> {
        tracing::info!("media: fullscreen on");
        Ok(())
    }
    fn exit_fullscreen(&mut self) {
        tracing::info!("media: fullscreen off");
    }
    fn capture_pointer(&mut self) {
        tracing::debug!("media: pointer captured");
    }
    fn release_pointer(&mut self) {
        tracing::debug!("media: pointer released");
    }
}

fn play(
    content: &EmbeddedContent,
    config: &Config,
    course_param: &str,
    lesson_param: Option<&str>,
    steps: &[ScriptStep],
    i18n: &I18n,
) {
    let settings = PlayerSettings::from_config(config);
    let mut session = LearningSession::open(content, course_param, lesson_param, ConsoleMedia, settings);

    match session.resolution() {
        RouteResolution::CourseNotFound => {
            println!("{}", i18n.tr("cli-course-not-found"));
            return;
        }
        RouteResolution::NothingPlayable => {
            println!("{}", i18n.tr("cli-nothing-playable"));
            return;
        }
        RouteResolution::Lesson(_) => {}
    }

    let start = Instant::now();
    let mut elapsed = Duration::ZERO;

    for step in steps {
        let now = start + elapsed;
        let player = session.player_mut();
        match step {
            ScriptStep::Metadata(duration) => player.on_metadata_loaded(*duration),
            ScriptStep::MetadataFailed => player.on_metadata_failed(),
            ScriptStep::Time(secs) => player.on_time_update(*secs),
            ScriptStep::Ended => player.on_ended(),
            ScriptStep::Key(key) => {
                player.handle_key(*key, FocusTarget::Page, now);
            }
            ScriptStep::Click(x) => player.scrub_click(*x, SCRIPT_BAR),
            ScriptStep::Press(x) => player.scrub_press(*x, SCRIPT_BAR),
            ScriptStep::Move(x) => player.pointer_moved(*x, SCRIPT_BAR, now),
            ScriptStep::Release => player.pointer_released(),
            ScriptStep::Hover(x) => {
                player.scrub_enter();
                player.scrub_hover(*x, SCRIPT_BAR);
            }
            ScriptStep::Rate(rate) => {
                if let Err(err) = player.set_playback_rate(*rate) {
                    println!("  ! {}", i18n.tr(err.i18n_key()));
                }
            }
            ScriptStep::Volume(volume) => player.set_volume(*volume),
            ScriptStep::Mute => player.toggle_mute(),
            ScriptStep::Quality(quality) => player.set_quality(*quality),
            ScriptStep::Fullscreen => {
                if let Err(err) = player.toggle_fullscreen(now) {
                    println!("  ! {}", i18n.tr(err.i18n_key()));
                }
            }
            ScriptStep::Wait(duration) => {
                elapsed += *duration;
                player.tick(start + elapsed);
            }
            ScriptStep::Select(id) => {
                session.select_lesson(LessonId(*id));
            }
            ScriptStep::Next => {
                session.next_lesson();
            }
            ScriptStep::Previous => {
                session.previous_lesson();
            }
            ScriptStep::Topic(topic) => session.ui_mut().toggle_topic_expanded(*topic),
            ScriptStep::Sidebar => session.ui_mut().toggle_sidebar(),
        }
        let state = match step {
            ScriptStep::Topic(_) | ScriptStep::Sidebar => describe_sidebar(session.ui()),
            _ => describe(&session.player().snapshot(), i18n),
        };
        println!("{:<24} {state}", format!("{step:?}"));
    }

    session.player_mut().unmount();
}

fn describe(snapshot: &PlaybackSnapshot, i18n: &I18n) -> String {
    let lesson = snapshot
        .lesson_id
        .map_or_else(|| "-".to_string(), |id| format!("#{id}"));
    let position = match snapshot.duration {
        Some(duration) => format!(
            "{} / {} ({:.0}%)",
            format_time(snapshot.current_time),
            format_time(duration),
            snapshot.progress_ratio * 100.0
        ),
        None if snapshot.phase.is_unavailable() => i18n.tr("error-playback-media-unavailable"),
        None => "--:--".to_string(),
    };
    let mut flags = Vec::new();
    if snapshot.is_muted {
        flags.push("muted".to_string());
    }
    if snapshot.is_fullscreen {
        flags.push("fullscreen".to_string());
    }
    if !snapshot.controls_visible {
        flags.push("controls hidden".to_string());
    }
    if snapshot.is_dragging {
        flags.push("dragging".to_string());
    }
    if let Some(hover) = snapshot.hover_time {
        flags.push(format!("preview {}", format_time(hover)));
    }
    format!(
        "{lesson} {:?} {position} {} {} {}",
        snapshot.phase,
        snapshot.playback_rate,
        snapshot.quality,
        flags.join(", ")
    )
}

fn describe_sidebar(ui: &CurriculumUiState) -> String {
    let expanded: Vec<String> = ui.expanded_topics().map(|topic| topic.to_string()).collect();
    format!(
        "sidebar {} tab {:?} expanded [{}]",
        if ui.sidebar_open { "open" } else { "closed" },
        ui.active_tab,
        expanded.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_script_parses() {
        let steps = parse_script(DEMO_SCRIPT).unwrap();
        assert_eq!(steps.first(), Some(&ScriptStep::Metadata(600.0)));
        assert!(steps.contains(&ScriptStep::Key(Key::Space)));
        assert!(steps.contains(&ScriptStep::Wait(Duration::from_secs(3))));
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let steps = parse_script("\n# only a comment\nplay-nothing-here # trailing\n");
        assert!(steps.is_err());
        let steps = parse_script("  \nmute # toggle\n\nquality 720p\n").unwrap();
        assert_eq!(
            steps,
            vec![ScriptStep::Mute, ScriptStep::Quality(VideoQuality::P720)]
        );
    }

    #[test]
    fn sidebar_steps_parse() {
        let steps = parse_script("topic 2\nsidebar\n").unwrap();
        assert_eq!(steps, vec![ScriptStep::Topic(TopicId(2)), ScriptStep::Sidebar]);
        assert!(parse_script("topic intro").is_err());
    }

    #[test]
    fn sidebar_summary_lists_expanded_topics() {
        let mut ui = CurriculumUiState::new();
        ui.toggle_topic_expanded(TopicId(3));
        ui.toggle_topic_expanded(TopicId(1));
        ui.toggle_sidebar();
        assert_eq!(
            describe_sidebar(&ui),
            "sidebar closed tab Curriculum expanded [1, 3]"
        );
    }

    #[test]
    fn bad_arguments_report_line() {
        let err = parse_script("mute\nseek-to 10\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
        let err = parse_script("rate fast").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }
}
