use anyhow::{anyhow, Context};
use clap::Parser;
use inventhora_utils::utils::js::number_to_js_string;
use inventhora_utils::utils::{logger, validation::Validate};
use inventhora_utils::{
    format_date, generate_random_string, generate_slug, get_subdomain, hostname_from_url,
    is_mobile, parse_date, parse_number, CliArgs, Command, DateFormat, DateInput,
    DeploymentConfig, RequestContext, UserAgentClassifier, UtilError,
};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::debug!("CLI args: {:?}", args);

    match run(args.command) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);

            // 呼叫端輸入錯誤與設定錯誤使用不同的退出碼
            let exit_code = match e.downcast_ref::<UtilError>() {
                Some(util_error) if util_error.is_precondition_violation() => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

fn run(command: Command) -> anyhow::Result<String> {
    match command {
        Command::Slug { text } => Ok(generate_slug(&text)),

        Command::RandomString { length } => Ok(generate_random_string(length)),

        Command::FormatDate {
            date,
            format,
            timezone,
        } => {
            let format = parse_format(&format)?;
            let input = match date.parse::<i64>() {
                Ok(ms) => DateInput::Timestamp(ms),
                Err(_) => DateInput::Text(date),
            };
            let formatted = format_date(&input, format, timezone.as_deref())?;
            Ok(formatted.into_string())
        }

        Command::ParseDate { text, format } => {
            let format = parse_format(&format)?;
            let parsed = parse_date(&text, format)?;
            Ok(parsed.to_rfc3339())
        }

        Command::ParseNumber { value } => {
            let parsed = parse_number(&serde_json::Value::String(value))?;
            Ok(parsed
                .map(number_to_js_string)
                .unwrap_or_else(|| "null".to_string()))
        }

        Command::Subdomain { host, config } => {
            let deployment = match config {
                Some(path) => DeploymentConfig::from_file(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => DeploymentConfig::from_env(),
            };
            deployment.validate()?;

            let hostname = hostname_from_url(&host)?;
            Ok(get_subdomain(&hostname, &deployment).to_string())
        }

        Command::IsMobile { user_agent } => {
            let ctx = RequestContext::Client { user_agent };
            Ok(is_mobile(&ctx, &UserAgentClassifier).to_string())
        }
    }
}

fn parse_format(selector: &str) -> anyhow::Result<DateFormat> {
    selector.parse::<DateFormat>().map_err(|e| anyhow!(e))
}
