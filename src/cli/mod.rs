use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::{
    config::{parse_timeout, Config},
    core::{Screen, Wizard, WizardStep},
    error::Result,
    render,
    schemas::request_schema,
    services::{FeedbackLink, Planner},
    types::decode_trip_request,
};

fn command() -> Command {
    Command::new("plan-ai")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Step-by-step trip planning wizard backed by a remote planner API")
        .arg(
            Arg::new("api-url")
                .short('u')
                .long("api-url")
                .value_name("URL")
                .help("Planner endpoint (or set PLAN_AI_API_URL)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Request timeout in seconds (or set PLAN_AI_TIMEOUT_SECS)"),
        )
        .arg(
            Arg::new("feedback-url")
                .long("feedback-url")
                .value_name("URL")
                .help("Feedback form to offer after a plan is shown (or set PLAN_AI_FEEDBACK_URL)"),
        )
        .arg(
            Arg::new("request")
                .short('r')
                .long("request")
                .value_name("FILE")
                .help("Submit a saved trip request JSON file instead of running the wizard"),
        )
        .arg(
            Arg::new("print-schema")
                .long("print-schema")
                .action(ArgAction::SetTrue)
                .help("Print the request JSON schema and exit"),
        )
}

/// CLI entry point for the plan-ai wizard
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let matches = command().get_matches();

    if matches.get_flag("print-schema") {
        println!("{}", serde_json::to_string_pretty(&request_schema()?)?);
        return Ok(());
    }

    let mut config = Config::from_env()?;
    if let Some(api_url) = matches.get_one::<String>("api-url") {
        config = config.with_api_url(api_url.as_str());
    }
    if let Some(timeout) = matches.get_one::<String>("timeout") {
        config = config.with_timeout(parse_timeout(timeout)?);
    }
    if let Some(feedback_url) = matches.get_one::<String>("feedback-url") {
        config = config.with_feedback_url(feedback_url.as_str());
    }

    info!(
        api_url = %config.api_url,
        timeout_secs = config.timeout.as_secs(),
        "Starting plan-ai"
    );
    let planner = config.plan_client();

    if let Some(path) = matches.get_one::<String>("request") {
        return submit_saved_request(Path::new(path), &planner).await;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut wizard = Wizard::new();
    run_wizard(
        &mut wizard,
        &planner,
        config.feedback_url.as_deref(),
        &mut input,
        &mut output,
    )
    .await?;

    Ok(())
}

/// Submit a request file once and print the resulting screen.
async fn submit_saved_request<P>(path: &Path, planner: &P) -> anyhow::Result<()>
where
    P: Planner + ?Sized,
{
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read request file {}", path.display()))?;
    let request = decode_trip_request(&raw)?;

    let mut wizard = Wizard::with_form(request);
    println!("{}", render::render_loading());
    wizard.submit(planner).await;

    match wizard.screen() {
        Screen::Result(response) => {
            println!("{}", render::render_result(response));
            Ok(())
        }
        Screen::Error(message) => {
            println!("{}", render::render_error(message));
            anyhow::bail!("trip plan request failed")
        }
        _ => Ok(()),
    }
}

/// What the user typed at a prompt
#[derive(Debug, PartialEq)]
enum Reply {
    Quit,
    Back,
    Text(String),
}

fn read_reply<R: BufRead>(input: &mut R) -> Result<Reply> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Reply::Quit);
    }
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    Ok(match line.trim() {
        "q" | "Q" => Reply::Quit,
        "b" | "B" => Reply::Back,
        _ => Reply::Text(line.to_string()),
    })
}

/// Drive the wizard over line-based input until the user quits or input ends.
pub async fn run_wizard<P, R, W>(
    wizard: &mut Wizard,
    planner: &P,
    feedback_url: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> Result<()>
where
    P: Planner + ?Sized,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "\n{}", render::render_screen(wizard, feedback_url.is_some()))?;

        match wizard.screen() {
            Screen::Step(WizardStep::Welcome) => match read_reply(input)? {
                Reply::Quit => break,
                Reply::Back => {}
                Reply::Text(_) => wizard.next(),
            },
            Screen::Step(WizardStep::Summary) => match read_reply(input)? {
                Reply::Quit => break,
                Reply::Back => wizard.prev(),
                Reply::Text(text) if text.trim().is_empty() => {
                    wizard.begin_submit();
                    writeln!(output, "\n{}", render::render_screen(wizard, false))?;
                    output.flush()?;
                    wizard.submit(planner).await;
                }
                Reply::Text(_) => {}
            },
            Screen::Step(step) => {
                if !prompt_fields(wizard, step, input, output)? {
                    break;
                }
            }
            Screen::Error(_) | Screen::Result(_) => {
                let feedback = feedback_url
                    .map(|base| FeedbackLink::build(base, wizard.form(), wizard.response()));
                match read_reply(input)? {
                    Reply::Quit => break,
                    Reply::Text(text) if text.trim().eq_ignore_ascii_case("r") => {
                        wizard.restart()
                    }
                    Reply::Text(text) if text.trim().eq_ignore_ascii_case("f") => {
                        if let Some(link) = feedback {
                            offer_feedback(&link, output)?;
                        }
                    }
                    _ => {}
                }
            }
            // submit() settles before the loop reads again
            Screen::Loading => {
                error!("Wizard left in loading state");
                break;
            }
        }
    }

    debug!(step = wizard.step().index(), "Wizard finished");
    Ok(())
}

fn offer_feedback<W: Write>(link: &FeedbackLink, output: &mut W) -> Result<()> {
    if !link.open() {
        writeln!(output, "브라우저를 열 수 없습니다. 아래 주소를 직접 열어 주세요.")?;
    }
    writeln!(output, "{}", link.as_str())?;
    Ok(())
}

/// Prompt for every field of `step`. Returns false when the user quits.
fn prompt_fields<R, W>(wizard: &mut Wizard, step: WizardStep, input: &mut R, output: &mut W) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    for field in step.fields() {
        loop {
            write!(output, "{}", render::field_prompt(*field))?;
            output.flush()?;

            match read_reply(input)? {
                Reply::Quit => return Ok(false),
                Reply::Back => {
                    wizard.prev();
                    return Ok(true);
                }
                Reply::Text(text) if text.trim().is_empty() => break,
                Reply::Text(text) => match wizard.edit(*field, &text) {
                    Ok(()) => break,
                    Err(err) => writeln!(output, "⚠ {err}")?,
                },
            }
        }
    }

    wizard.next();
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_reply() {
        let mut input = Cursor::new("q\nB\n 카페, 해변 \r\n\n");
        assert_eq!(read_reply(&mut input).unwrap(), Reply::Quit);
        assert_eq!(read_reply(&mut input).unwrap(), Reply::Back);
        assert_eq!(
            read_reply(&mut input).unwrap(),
            Reply::Text(" 카페, 해변 ".to_string())
        );
        assert_eq!(read_reply(&mut input).unwrap(), Reply::Text(String::new()));
        assert_eq!(read_reply(&mut input).unwrap(), Reply::Quit);
    }

    #[test]
    fn test_command_parses_flags() {
        let matches = command()
            .try_get_matches_from(["plan-ai", "--timeout", "30", "--print-schema"])
            .unwrap();
        assert!(matches.get_flag("print-schema"));
        assert_eq!(
            matches.get_one::<String>("timeout").map(String::as_str),
            Some("30")
        );
    }
}
