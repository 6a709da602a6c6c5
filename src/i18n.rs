// ==========================================
// 地铁失物资源规划 - 文案本地化
// ==========================================
// 职责: 备注 / 待办动作标题的本地化渲染
// 语言包: locales/*.yml（en 为回退语言）
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

use crate::domain::types::{ActionKind, NoteKind};
use tracing::warn;

/// 默认语言
pub const DEFAULT_LOCALE: &str = "en";

/// 支持的界面语言
pub const SUPPORTED_LOCALES: &[&str] = &[DEFAULT_LOCALE, "zh-CN"];

/// 是否为支持的语言
pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 切换语言
///
/// 不支持的语言不切换，保留当前语言并返回 false
pub fn set_locale(locale: &str) -> bool {
    if !is_supported(locale) {
        warn!(locale, current = %current_locale(), "不支持的语言，保留当前语言");
        return false;
    }
    rust_i18n::set_locale(locale);
    true
}

/// 备注文本（NoteKind::None 为空串）
pub fn note_text(kind: NoteKind) -> String {
    kind.i18n_key()
        .map(|key| rust_i18n::t!(key).to_string())
        .unwrap_or_default()
}

/// 待办动作标题
///
/// # 示例
/// ```no_run
/// use lost_items_planner::i18n::action_title;
/// use lost_items_planner::ActionKind;
/// let title = action_title(ActionKind::EmptyStock, 64);
/// ```
pub fn action_title(kind: ActionKind, count: u32) -> String {
    rust_i18n::t!(kind.i18n_key()).replace("%{count}", &count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // locale 为全局状态,测试默认并行执行,这里串行化
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_unsupported_locale_keeps_current() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        assert!(set_locale("zh-CN"));
        assert_eq!(current_locale(), "zh-CN");

        assert!(!set_locale("fr"));
        assert_eq!(current_locale(), "zh-CN");

        assert!(set_locale("en"));
        assert_eq!(current_locale(), "en");
    }

    #[test]
    fn test_note_text_per_kind() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        assert_eq!(note_text(NoteKind::Festival), "Festival Day - Expect high volume");
        assert_eq!(
            note_text(NoteKind::Weekend),
            "Weekend - Above average volume expected"
        );
        assert_eq!(
            note_text(NoteKind::BusyWeekday),
            "Busy weekday - Prepare additional staff"
        );
        assert_eq!(note_text(NoteKind::None), "");

        set_locale("zh-CN");
        assert!(note_text(NoteKind::Festival).contains("节日"));
        assert_eq!(note_text(NoteKind::None), "");

        set_locale("en");
    }

    #[test]
    fn test_action_title_fills_count() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        assert_eq!(action_title(ActionKind::EmptyStock, 64), "Empty 64 stock items");
        assert_eq!(
            action_title(ActionKind::ProcessFound, 42),
            "Process 42 found items"
        );

        set_locale("zh-CN");
        let title = action_title(ActionKind::ProcessFound, 42);
        assert!(title.contains("42"));
        assert!(!title.contains("%{count}"));

        set_locale("en");
    }
}
