use clap::Parser;
use config_properties::config::{Command, ContextArgs};
use config_properties::utils::{logger, validation::Validate};
use config_properties::{
    CliConfig, ConfigurationProperty, ExportFormat, FilePropertyRepository, LocalStorage,
    NewConfigurationProperties, PropertiesService, PropertyId, Result, ServiceConfig,
};

type Service = PropertiesService<FilePropertyRepository<LocalStorage>>;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 載入配置
    let mut config = match &cli.config {
        Some(path) => match ServiceConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => ServiceConfig::default(),
    };

    if let Some(data_dir) = &cli.data_dir {
        config.storage.base_path = data_dir.clone();
    }

    // 初始化日誌
    if config.json_logging() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }
    tracing::debug!("Service config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.severity().exit_code();

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(cli: &CliConfig, config: &ServiceConfig) -> Result<()> {
    let storage = LocalStorage::new(config.base_path().to_string());
    let repository = FilePropertyRepository::open(storage, config.file_name()).await?;
    let service = PropertiesService::new(repository);

    match &cli.command {
        Command::List { context } => {
            let (profile, label) = resolve(context, config);
            for property in service
                .get_properties(&context.application, profile, label)
                .await?
            {
                println!("{}={}", property.key, property.value);
            }
        }
        Command::Set {
            context,
            key,
            value,
        } => {
            let (profile, label) = resolve(context, config);
            let batch = NewConfigurationProperties::new(&context.application, profile, label)
                .with(key, value);
            service.create_properties(&batch).await?;
            println!("✅ Saved {}", PropertyId::new(&context.application, profile, label, key));
        }
        Command::Import { file } => import(&service, file).await?,
        Command::Delete { context, key } => {
            let (profile, label) = resolve(context, config);
            let id = PropertyId::new(&context.application, profile, label, key);
            service.delete_property(&id).await?;
            println!("✅ Deleted {}", id);
        }
        Command::Export {
            context,
            format,
            output,
        } => {
            let format: ExportFormat = format.parse()?;
            let (profile, label) = resolve(context, config);
            let properties = service
                .get_properties(&context.application, profile, label)
                .await?;
            export(&properties, format, output.as_deref()).await?;
        }
    }

    Ok(())
}

fn resolve<'a>(context: &'a ContextArgs, config: &'a ServiceConfig) -> (&'a str, &'a str) {
    (
        context
            .profile
            .as_deref()
            .unwrap_or_else(|| config.default_profile()),
        context
            .label
            .as_deref()
            .unwrap_or_else(|| config.default_label()),
    )
}

async fn import(service: &Service, file: &str) -> Result<()> {
    tracing::info!("📁 Importing properties from: {}", file);
    let data = tokio::fs::read(file).await?;
    let batch: NewConfigurationProperties = serde_json::from_slice(&data)?;

    let saved = service.create_properties(&batch).await?;
    println!(
        "✅ Imported {} properties into {}/{}/{}",
        saved.len(),
        batch.application,
        batch.profile,
        batch.label
    );
    Ok(())
}

async fn export(
    properties: &[ConfigurationProperty],
    format: ExportFormat,
    output: Option<&str>,
) -> Result<()> {
    let rendered = config_properties::core::export::render(properties, format)?;

    match output {
        Some(path) => {
            tokio::fs::write(path, rendered).await?;
            tracing::info!(
                "📁 Exported {} properties as {} to {}",
                properties.len(),
                format.extension(),
                path
            );
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
