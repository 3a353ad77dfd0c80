//! Static command catalog and the per-command handler modules.
//!
//! All declarative validation lives here: required flags, numeric ranges,
//! string length caps, and closed choice sets are encoded in the catalog
//! and enforced by Discord before an interaction ever reaches a handler, so
//! handlers may assume them satisfied.

pub mod ai;
pub mod feedback;
pub mod help;
pub mod history;
pub mod profile;
pub mod stats;

use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::CommandOptionType;
use serenity::model::Permissions;
use thiserror::Error;

/// A handler failed to deliver its reply. `acknowledged` tells the router
/// which fallback is still legal: editing the deferred placeholder, or
/// sending a fresh reply.
#[derive(Debug, Error)]
#[error("command delivery failed")]
pub struct CommandError {
    pub acknowledged: bool,
    #[source]
    pub source: serenity::Error,
}

impl CommandError {
    pub fn before_ack(source: serenity::Error) -> Self {
        Self {
            acknowledged: false,
            source,
        }
    }

    pub fn after_ack(source: serenity::Error) -> Self {
        Self {
            acknowledged: true,
            source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String {
        max_length: Option<u16>,
        /// Closed choice set as (display label, wire value) pairs.
        choices: &'static [(&'static str, &'static str)],
    },
    Integer {
        min: Option<u64>,
        max: Option<u64>,
    },
    SubCommand {
        params: &'static [ParamSpec],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub name_ja: &'static str,
    pub description: &'static str,
    pub description_ja: &'static str,
    pub kind: ParamKind,
    pub required: bool,
}

/// One entry of the immutable command catalog, constructed once at process
/// start and never mutated after registration.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub name_ja: &'static str,
    pub description: &'static str,
    pub description_ja: &'static str,
    pub params: &'static [ParamSpec],
    pub admin_only: bool,
}

const CATALOG: &[CommandSpec] = &[
    CommandSpec {
        name: "ai",
        name_ja: "ai",
        description: "AIツールのおすすめを教えてもらう",
        description_ja: "AIツールのおすすめを教えてもらう",
        params: &[ParamSpec {
            name: "task",
            name_ja: "やりたいこと",
            description: "どんな作業をしたいか教えてください",
            description_ja: "どんな作業をしたいか教えてください",
            kind: ParamKind::String {
                max_length: Some(500),
                choices: &[],
            },
            required: true,
        }],
        admin_only: false,
    },
    CommandSpec {
        name: "help",
        name_ja: "ヘルプ",
        description: "Discord Butlerの使い方を表示",
        description_ja: "Discord Butlerの使い方を表示",
        params: &[],
        admin_only: false,
    },
    CommandSpec {
        name: "feedback",
        name_ja: "フィードバック",
        description: "推薦されたツールについてフィードバックを送る",
        description_ja: "推薦されたツールについてフィードバックを送る",
        params: &[
            ParamSpec {
                name: "tool",
                name_ja: "ツール名",
                description: "フィードバックしたいツール名",
                description_ja: "フィードバックしたいツール名",
                kind: ParamKind::String {
                    max_length: None,
                    choices: &[],
                },
                required: true,
            },
            ParamSpec {
                name: "rating",
                name_ja: "評価",
                description: "1-5の評価（5が最高）",
                description_ja: "1-5の評価（5が最高）",
                kind: ParamKind::Integer {
                    min: Some(1),
                    max: Some(5),
                },
                required: true,
            },
            ParamSpec {
                name: "comment",
                name_ja: "コメント",
                description: "詳細なフィードバック（任意）",
                description_ja: "詳細なフィードバック（任意）",
                kind: ParamKind::String {
                    max_length: Some(1000),
                    choices: &[],
                },
                required: false,
            },
        ],
        admin_only: false,
    },
    CommandSpec {
        name: "history",
        name_ja: "履歴",
        description: "過去の推薦履歴を表示",
        description_ja: "過去の推薦履歴を表示",
        params: &[ParamSpec {
            name: "limit",
            name_ja: "件数",
            description: "表示する件数（デフォルト: 5）",
            description_ja: "表示する件数（デフォルト: 5）",
            kind: ParamKind::Integer {
                min: Some(1),
                max: Some(10),
            },
            required: false,
        }],
        admin_only: false,
    },
    CommandSpec {
        name: "profile",
        name_ja: "プロファイル",
        description: "あなたのプロファイルを表示・更新",
        description_ja: "あなたのプロファイルを表示・更新",
        params: &[
            ParamSpec {
                name: "view",
                name_ja: "表示",
                description: "プロファイルを表示",
                description_ja: "プロファイルを表示",
                kind: ParamKind::SubCommand { params: &[] },
                required: false,
            },
            ParamSpec {
                name: "update",
                name_ja: "更新",
                description: "スキルレベルを更新",
                description_ja: "スキルレベルを更新",
                kind: ParamKind::SubCommand {
                    params: &[ParamSpec {
                        name: "skill_level",
                        name_ja: "スキルレベル",
                        description: "あなたのAIツール使用経験",
                        description_ja: "あなたのAIツール使用経験",
                        kind: ParamKind::String {
                            max_length: None,
                            choices: &[
                                ("初心者", "beginner"),
                                ("中級者", "intermediate"),
                                ("上級者", "advanced"),
                                ("エキスパート", "expert"),
                            ],
                        },
                        required: true,
                    }],
                },
                required: false,
            },
        ],
        admin_only: false,
    },
    CommandSpec {
        name: "stats",
        name_ja: "統計",
        description: "システム統計を表示（管理者のみ）",
        description_ja: "システム統計を表示（管理者のみ）",
        params: &[],
        admin_only: true,
    },
];

/// The full ordered catalog.
pub fn catalog() -> &'static [CommandSpec] {
    CATALOG
}

pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    CATALOG.iter().find(|spec| spec.name == name)
}

fn build_option(param: &ParamSpec) -> CreateCommandOption {
    let mut option = match &param.kind {
        ParamKind::String {
            max_length,
            choices,
        } => {
            let mut option = CreateCommandOption::new(
                CommandOptionType::String,
                param.name,
                param.description,
            )
            .required(param.required);
            if let Some(max) = max_length {
                option = option.max_length(*max);
            }
            for (label, value) in *choices {
                option = option.add_string_choice(*label, *value);
            }
            option
        }
        ParamKind::Integer { min, max } => {
            let mut option = CreateCommandOption::new(
                CommandOptionType::Integer,
                param.name,
                param.description,
            )
            .required(param.required);
            if let Some(min) = min {
                option = option.min_int_value(*min);
            }
            if let Some(max) = max {
                option = option.max_int_value(*max);
            }
            option
        }
        ParamKind::SubCommand { params } => {
            let mut option = CreateCommandOption::new(
                CommandOptionType::SubCommand,
                param.name,
                param.description,
            );
            for nested in *params {
                option = option.add_sub_option(build_option(nested));
            }
            option
        }
    };
    option = option
        .name_localized("ja", param.name_ja)
        .description_localized("ja", param.description_ja);
    option
}

/// Serializes the catalog into the declarative schema Discord consumes at
/// registration time.
pub fn describe() -> Vec<CreateCommand> {
    CATALOG
        .iter()
        .map(|spec| {
            let mut command = CreateCommand::new(spec.name)
                .description(spec.description)
                .name_localized("ja", spec.name_ja)
                .description_localized("ja", spec.description_ja);
            for param in spec.params {
                command = command.add_option(build_option(param));
            }
            if spec.admin_only {
                command = command.default_member_permissions(Permissions::ADMINISTRATOR);
            }
            command
        })
        .collect()
}
