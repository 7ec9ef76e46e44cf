#[derive(Debug, Clone)]
pub enum Message {
    // === APPLICATION MESSAGES ===
    AppBanner(String, String), // name, version
    InteractiveGoodbye,
    ActionFailed(String), // error

    // === TASK MESSAGES ===
    TaskCreated(String),     // title
    GroupCreated(String),    // name
    ComponentRemoved(u32),   // id
    ComponentNotFound(u32),  // id
    NotAGroup(u32),          // id
    StatusApplied(usize, String), // touched leaves, status
    GroupToggled(String, bool),   // name, expanded
    TasksHeader,
    TasksNotFound,
    TreeHeader,
    GroupSummary(usize, u8), // tasks, progress

    // === STRATEGY MESSAGES ===
    StrategiesHeader,
    SortKeysHeader,
    FilterKeysHeader,
    CompoundFilterHint,
    SortApplied(String),
    FilterApplied(String),
    CurrentStrategies(String, String), // sort, filter

    // === SETTINGS MESSAGES ===
    SettingsHeader,
    SettingValue(String, String), // key, value
    SettingUpdated(String, String),
    SettingsReset,
    SettingNotFound(String),

    // === NOTIFICATION MESSAGES ===
    NotificationsHeader,
    NoNotifications,

    // === PROMPTS ===
    PromptSelectAction,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptSelectCategory,
    PromptSelectParent,
    PromptGroupName,
    PromptSelectComponent,
    PromptSelectStatus,
    PromptSelectSort,
    PromptSelectFilter,
    PromptSearchText,
    SearchFilterOption,
    PromptSettingKey,
    PromptSettingValue,
    RootGroupLabel,
}
