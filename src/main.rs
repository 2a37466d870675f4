// ==========================================
// 产品目录导入系统 - 命令行主入口
// ==========================================
// 技术栈: Rust + SQLite
// 流程: 参数解析 → 日志初始化 → 启动检查 → 导入 → 汇总
// ==========================================

use anyhow::Context;
use catalog_importer::importer::{ImportDriver, RunLog};
use catalog_importer::repository::SqliteProductRepository;
use catalog_importer::{logging, APP_NAME, VERSION};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catalog-importer")]
#[command(author, version, about = "产品目录 CSV 对账导入工具")]
struct Cli {
    /// 输入 CSV 文件（首行为表头,每行 5 个字段: 编码,名称,价格,库存,分类）
    #[arg(short, long)]
    input: PathBuf,

    /// 目录数据库文件（默认: 用户数据目录下 catalog-importer/catalog.db）
    #[arg(short, long)]
    db: Option<PathBuf>,

    /// 运行日志文件
    #[arg(short, long, default_value = "import_log.txt")]
    log: PathBuf,
}

/// 默认数据库路径（用户数据目录,目录不存在则创建）
fn default_db_path() -> anyhow::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("catalog-importer");
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("无法创建数据目录: {}", data_dir.display()))?;
    Ok(data_dir.join("catalog.db"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", APP_NAME);
    tracing::info!("系统版本: {}", VERSION);
    tracing::info!("==================================================");

    // 数据库路径
    let db_path = match cli.db {
        Some(path) => path,
        None => default_db_path()?,
    };
    tracing::info!("使用数据库: {}", db_path.display());

    // 启动检查: 目录连接失败在此终止,任何行都未被处理
    let db_path_str = db_path
        .to_str()
        .context("数据库路径包含非法字符")?
        .to_string();
    let repository = SqliteProductRepository::new(&db_path_str)
        .with_context(|| format!("无法连接产品目录数据库: {}", db_path_str))?;
    tracing::info!("目录数据库连接成功");

    // 执行导入
    let run_log = RunLog::create(&cli.log);
    let mut driver = ImportDriver::new(repository, run_log);
    let summary = driver
        .run(&cli.input)
        .with_context(|| format!("导入失败: {}", cli.input.display()))?;

    // 控制台汇总
    println!("===========================================");
    println!("  导入汇总");
    println!("===========================================");
    println!("  新增产品: {}", summary.tally.inserted);
    println!("  更新产品（价格上调）: {}", summary.tally.updated);
    println!("  跳过产品（价格未上调）: {}", summary.tally.skipped);
    println!("  错误记录: {}", summary.tally.failed);
    println!("===========================================");
    println!("  处理行数: {}", summary.total_rows);
    println!("  耗时: {} ms", summary.elapsed.as_millis());
    println!("  运行日志: {}", cli.log.display());

    Ok(())
}
