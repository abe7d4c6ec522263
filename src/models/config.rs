// ============================================================================
// LangSync - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ 配置文件读写操作
//   - ✅ 运行时参数合并
//   - ❌ 不应包含监听/生成逻辑
//   - ❌ 不应包含 CLI 参数解析
//
// ============================================================================

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::models::locale::{LocaleMeta, TextDirection};

/// 默认配置文件名
pub const CONFIG_FILE_NAME: &str = "langsync.toml";

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// LangSync 配置文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 项目根目录
    #[serde(default = "Config::default_root")]
    pub root: String,
    /// 监听配置
    #[serde(default)]
    pub watch: WatchSection,
    /// 开发服务器配置
    #[serde(default)]
    pub dev_server: DevServerSection,
    /// 翻译表配置
    #[serde(default)]
    pub translations: TranslationsSection,
    /// 可用语言元数据
    #[serde(default)]
    pub locales: IndexMap<String, LocaleMeta>,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 监听配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchSection {
    /// 生成命令
    #[serde(default = "Config::default_command")]
    pub command: String,
    /// 监听的 glob 模式（相对项目根目录）
    #[serde(default = "Config::default_patterns", alias = "watch")]
    pub patterns: Vec<String>,
    /// 是否输出生成命令的 stdout/stderr
    #[serde(default)]
    pub debug: bool,
    /// 防抖静默期（毫秒）
    #[serde(default = "Config::default_debounce")]
    pub debounce: u64,
    /// 生成命令超时（秒，0 表示不限制）
    #[serde(default)]
    pub timeout: u64,
}

/// 开发服务器配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DevServerSection {
    /// 接收整页刷新通知的地址（为空时只打印日志）
    #[serde(default)]
    pub reload_url: String,
}

/// 翻译表配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationsSection {
    /// 生成器输出的翻译表 JSON 路径
    #[serde(default = "Config::default_table_path")]
    pub table: String,
    /// lookup 命令默认使用的语言
    #[serde(default = "Config::default_locale")]
    pub locale: String,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "Config::default_language")]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub root: Option<String>,
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub language: Option<String>,
    pub command: Option<String>,
    pub patterns: Option<Vec<String>>,
    pub debug: Option<bool>,
    pub debounce: Option<u64>,
    pub timeout: Option<u64>,
    pub reload_url: Option<String>,
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    /// 获取默认项目根目录
    fn default_root() -> String {
        ".".to_string()
    }

    /// 获取默认生成命令
    fn default_command() -> String {
        "php artisan translations:generate --all".to_string()
    }

    /// 获取默认监听模式
    fn default_patterns() -> Vec<String> {
        vec![
            "lang/**/*.php".to_string(),
            "lang/**/*.json".to_string(),
            "resources/lang/**/*.php".to_string(),
            "resources/lang/**/*.json".to_string(),
        ]
    }

    /// 获取默认防抖时长（毫秒）
    fn default_debounce() -> u64 {
        300
    }

    /// 获取默认翻译表路径
    fn default_table_path() -> String {
        "resources/js/translations.json".to_string()
    }

    /// 获取默认语言代码
    fn default_locale() -> String {
        "en".to_string()
    }

    /// 获取默认是否彩色输出
    fn default_colored() -> bool {
        true
    }

    /// 获取默认界面语言
    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    pub fn initialize(config_path: Option<&Path>) -> anyhow::Result<()> {
        let config = match config_path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load_or_default(Path::new(CONFIG_FILE_NAME))?,
        };
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 读取指定配置文件
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 文件不存在时使用默认配置
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 将运行时参数合并到配置
    pub fn apply_runtime_args(&mut self, args: RuntimeArgs) {
        if let Some(root) = args.root {
            self.root = root;
        }
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
        if let Some(command) = args.command {
            self.watch.command = command;
        }
        if let Some(patterns) = args.patterns {
            if !patterns.is_empty() {
                self.watch.patterns = patterns;
            }
        }
        if let Some(debug) = args.debug {
            self.watch.debug = debug;
        }
        if let Some(debounce) = args.debounce {
            self.watch.debounce = debounce;
        }
        if let Some(timeout) = args.timeout {
            self.watch.timeout = timeout;
        }
        if let Some(reload_url) = args.reload_url {
            self.dev_server.reload_url = reload_url;
        }
    }

    /// 合并运行时参数到全局配置
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        config.apply_runtime_args(args);
        Ok(())
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置模板
    pub fn generate_default_template() -> Self {
        let mut config = Self::default();

        // 示例语言元数据
        config.locales.insert(
            "en".to_string(),
            LocaleMeta {
                label: "English".to_string(),
                flag: "🇬🇧".to_string(),
                dir: TextDirection::Ltr,
            },
        );
        config.locales.insert(
            "ar".to_string(),
            LocaleMeta {
                label: "العربية".to_string(),
                flag: "🇸🇦".to_string(),
                dir: TextDirection::Rtl,
            },
        );

        config
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &Path) -> anyhow::Result<()> {
        Self::generate_default_template().save_to_file(config_path)
    }

    /// 获取全局配置快照（未初始化时返回默认值）
    pub fn current() -> Self {
        Self::read_global(|config| config.clone()).unwrap_or_default()
    }

    /// 项目根目录（相对路径基于当前目录）
    pub fn root_dir(&self) -> PathBuf {
        let root = PathBuf::from(&self.root);
        if root.is_absolute() {
            return root;
        }
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        if self.root == "." {
            cwd
        } else {
            cwd.join(root)
        }
    }

    /// 翻译表路径（相对路径基于项目根目录）
    pub fn table_path(&self) -> PathBuf {
        let table = PathBuf::from(&self.translations.table);
        if table.is_absolute() {
            table
        } else {
            self.root_dir().join(table)
        }
    }

    pub fn debounce_duration(&self) -> Duration {
        Duration::from_millis(self.watch.debounce)
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        match self.watch.timeout {
            0 => None,
            seconds => Some(Duration::from_secs(seconds)),
        }
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        Self::read_global(|config| config.i18n.language.clone())
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        Self::read_global(|config| config.output.verbose).unwrap_or(false)
    }

    /// 获取是否彩色输出（带默认值）
    pub fn get_colored() -> bool {
        Self::read_global(|config| config.output.colored)
            .unwrap_or_else(|_| Self::default_colored())
    }

    fn read_global<T>(read: impl FnOnce(&Config) -> T) -> anyhow::Result<T> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(read(&config))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
            watch: WatchSection::default(),
            dev_server: DevServerSection::default(),
            translations: TranslationsSection::default(),
            locales: IndexMap::new(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl Default for WatchSection {
    fn default() -> Self {
        Self {
            command: Config::default_command(),
            patterns: Config::default_patterns(),
            debug: false,
            debounce: Config::default_debounce(),
            timeout: 0,
        }
    }
}

impl Default for TranslationsSection {
    fn default() -> Self {
        Self {
            table: Config::default_table_path(),
            locale: Config::default_locale(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}
