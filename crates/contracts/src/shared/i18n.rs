//! Localization catalogs
//!
//! Field descriptors carry localization keys only. Display strings come from
//! a [`Localizer`]; a missing key falls back to the key itself.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Supported console locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::EnUs => "en-US",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "zh" | "zh-cn" => Ok(Self::ZhCn),
            "en" | "en-us" => Ok(Self::EnUs),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}

/// Resolves localization keys to display strings
pub trait Localizer {
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Display string for `key`, or the key itself when missing
    fn t<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.lookup(key) {
            Some(text) => Cow::Borrowed(text),
            None => Cow::Borrowed(key),
        }
    }
}

/// Static key -> text table for one locale
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: Locale,
    entries: HashMap<&'static str, &'static str>,
}

impl Catalog {
    pub fn new(locale: Locale, entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            locale,
            entries: entries.iter().copied().collect(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Built-in catalog for a locale
    pub fn builtin(locale: Locale) -> &'static Catalog {
        match locale {
            Locale::ZhCn => &ZH_CN,
            Locale::EnUs => &EN_US,
        }
    }
}

impl Localizer for Catalog {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).copied()
    }
}

static ZH_CN: Lazy<Catalog> = Lazy::new(|| Catalog::new(Locale::ZhCn, ZH_CN_ENTRIES));
static EN_US: Lazy<Catalog> = Lazy::new(|| Catalog::new(Locale::EnUs, EN_US_ENTRIES));

const ZH_CN_ENTRIES: &[(&str, &str)] = &[
    ("basic.Create", "新建"),
    ("basic.Edit", "编辑"),
    ("basic.SaveSuccess", "保存成功"),
    ("meta.Sources.PostgreSQL.Element", "PostgreSQL 数据源"),
    ("meta.Sources.PostgreSQL.List", "PostgreSQL 数据源列表"),
    ("meta.Sources.PostgreSQL.Hostname", "服务器主机"),
    ("meta.Sources.PostgreSQL.Port", "端口"),
    ("meta.Sources.PostgreSQL.Database", "数据库名"),
    ("meta.Sources.PostgreSQL.SchemaName", "Schema 名称"),
    ("meta.Sources.PostgreSQL.Username", "用户名"),
    ("meta.Sources.PostgreSQL.Password", "密码"),
    ("meta.Sources.PostgreSQL.TableName", "表名"),
    ("meta.Sources.PostgreSQL.TableNameHelp", "多个表名请用英文逗号分隔"),
    ("meta.Sources.PostgreSQL.PrimaryKey", "主键"),
    ("meta.Sources.PostgreSQL.decodingPluginName", "解码插件名称"),
    ("meta.Users.Element", "用户"),
    ("meta.Users.List", "用户管理"),
    ("meta.Users.Type", "帐号类型"),
    ("meta.Users.Name", "用户名称"),
    ("meta.Users.Password", "用户密码"),
    ("meta.Users.ValidDays", "有效时长"),
    ("meta.Users.TypeUser", "普通用户"),
    ("meta.Users.TypeAdmin", "系统管理员"),
];

const EN_US_ENTRIES: &[(&str, &str)] = &[
    ("basic.Create", "Create"),
    ("basic.Edit", "Edit"),
    ("basic.SaveSuccess", "Saved successfully"),
    ("meta.Sources.PostgreSQL.Element", "PostgreSQL source"),
    ("meta.Sources.PostgreSQL.List", "PostgreSQL sources"),
    ("meta.Sources.PostgreSQL.Hostname", "Hostname"),
    ("meta.Sources.PostgreSQL.Port", "Port"),
    ("meta.Sources.PostgreSQL.Database", "Database"),
    ("meta.Sources.PostgreSQL.SchemaName", "Schema name"),
    ("meta.Sources.PostgreSQL.Username", "Username"),
    ("meta.Sources.PostgreSQL.Password", "Password"),
    ("meta.Sources.PostgreSQL.TableName", "Table name"),
    (
        "meta.Sources.PostgreSQL.TableNameHelp",
        "Separate multiple table names with commas",
    ),
    ("meta.Sources.PostgreSQL.PrimaryKey", "Primary key"),
    ("meta.Sources.PostgreSQL.decodingPluginName", "Decoding plugin"),
    ("meta.Users.Element", "user"),
    ("meta.Users.List", "Users"),
    ("meta.Users.Type", "Account type"),
    ("meta.Users.Name", "Username"),
    ("meta.Users.Password", "Password"),
    ("meta.Users.ValidDays", "Valid for"),
    ("meta.Users.TypeUser", "Regular user"),
    ("meta.Users.TypeAdmin", "Administrator"),
];
