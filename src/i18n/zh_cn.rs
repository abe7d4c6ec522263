// ============================================================================
// LangSync - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文提示信息定义
// 边界:
//   - ✅ 中文提示文本定义
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 生成
    ("regenerate.command_run", "执行命令: :command"),
    ("regenerate.command_stdout", "命令输出:\n:output"),
    ("regenerate.command_stderr", "命令错误输出:\n:output"),
    ("regenerate.success", "翻译已重新生成，耗时 :seconds 秒"),
    ("regenerate.failed", "翻译生成失败（退出码 :code）"),
    ("regenerate.debug_hint", "使用 --debug 查看命令输出"),
    ("regenerate.error", "无法执行翻译生成: :error"),
    // 监听
    ("watch.start", "开始监听语言文件，命令: :command（防抖 :debounce 毫秒）"),
    ("watch.pattern", "  模式: :pattern"),
    ("watch.attached", "正在监听 :root 下的 :count 个模式"),
    ("watch.file_event", "文件 :kind: :path"),
    ("watch.reload_target", "刷新通知地址: :url"),
    ("watch.reload_failed", "通知开发服务器失败: :error"),
    ("watch.stopping", "正在停止监听..."),
    ("watch.stopped", "监听已停止"),
    ("reload.logged", "已请求整页刷新"),
    // 生成命令
    ("generate.running", "正在生成翻译: :command"),
    // 语言列表
    ("locales.header", "可用语言（:count 个）:"),
    ("locales.none", "未配置可用语言"),
    ("locales.loaded", "已加载翻译"),
    ("locales.not_loaded", "无翻译"),
    ("locales.table_missing", "未找到翻译表: :path（请先执行 `langsync generate`）"),
    // 查找
    ("lookup.table_failed", "加载翻译表失败: :path"),
    // 初始化
    ("init.start", "正在初始化配置..."),
    ("init.config_exists", "配置文件已存在: :path"),
    ("init.use_force_hint", "使用 --force 覆盖"),
    ("init.config_created", "配置文件已创建: :path"),
    ("init.next_steps", "编辑 [watch] 配置后执行 `langsync watch`"),
    ("init.create_failed", "创建配置文件失败: :error"),
    // 错误信息
    ("error.root_not_exist", "项目根目录不存在: :path"),
    ("error.signal_failed", "无法监听 Ctrl-C"),
    ("error.read_page", "读取页面数据失败: :path"),
    ("error.parse_page", "解析页面数据失败: :path"),
];
