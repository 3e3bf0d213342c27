use crate::domain::ports::TextField;
use std::sync::Arc;

/// 只保留 ASCII 數字
pub fn digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// 依欄位規則把使用者輸入格式化
pub trait Formatter: Send + Sync {
    fn format(&self, input: &str) -> String;
}

/// 固定樣板遮罩，`#` 代表一位數字，其餘字元原樣輸出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskTemplate {
    pattern: String,
}

impl MaskTemplate {
    pub const PLACEHOLDER: char = '#';

    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn cpf() -> Self {
        Self::new("###.###.###-##")
    }

    pub fn cep() -> Self {
        Self::new("#####-###")
    }

    pub fn capacity(&self) -> usize {
        self.pattern
            .chars()
            .filter(|&c| c == Self::PLACEHOLDER)
            .count()
    }
}

impl Formatter for MaskTemplate {
    fn format(&self, input: &str) -> String {
        let raw = digits(input);
        let mut remaining = raw.chars().take(self.capacity()).peekable();
        let mut masked = String::with_capacity(self.pattern.len());

        for slot in self.pattern.chars() {
            // 數字用完就停，不補尾端的字面字元
            if remaining.peek().is_none() {
                break;
            }
            if slot == Self::PLACEHOLDER {
                if let Some(d) = remaining.next() {
                    masked.push(d);
                }
            } else {
                masked.push(slot);
            }
        }

        masked
    }
}

/// 巴西電話：(DD) NNNN-NNNN 或 (DD) NNNNN-NNNN
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhoneFormatter;

impl PhoneFormatter {
    pub const MAX_DIGITS: usize = 11;
}

impl Formatter for PhoneFormatter {
    fn format(&self, input: &str) -> String {
        let mut raw = digits(input);
        raw.truncate(Self::MAX_DIGITS);
        let len = raw.len();
        let mut masked = String::with_capacity(len + 5);

        if len > 0 {
            masked.push('(');
            masked.push_str(&raw[..len.min(2)]);
        }
        if len > 2 {
            masked.push_str(") ");
        }

        if len == Self::MAX_DIGITS {
            masked.push_str(&raw[2..7]);
            masked.push('-');
            masked.push_str(&raw[7..]);
        } else if len > 6 {
            masked.push_str(&raw[2..6]);
            masked.push('-');
            masked.push_str(&raw[6..]);
        } else if len > 2 {
            masked.push_str(&raw[2..]);
        }

        masked
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Cpf,
    Cep,
    Phone,
}

impl FieldKind {
    pub fn formatter(self) -> FieldFormatter {
        match self {
            FieldKind::Cpf => FieldFormatter::Template(MaskTemplate::cpf()),
            FieldKind::Cep => FieldFormatter::Template(MaskTemplate::cep()),
            FieldKind::Phone => FieldFormatter::Phone(PhoneFormatter),
        }
    }
}

impl std::str::FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpf" => Ok(FieldKind::Cpf),
            "cep" => Ok(FieldKind::Cep),
            "phone" | "telefone" => Ok(FieldKind::Phone),
            other => Err(format!("unknown field '{}', expected cpf, cep or phone", other)),
        }
    }
}

/// 每個欄位的格式化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFormatter {
    Template(MaskTemplate),
    Phone(PhoneFormatter),
}

impl Formatter for FieldFormatter {
    fn format(&self, input: &str) -> String {
        match self {
            FieldFormatter::Template(mask) => mask.format(input),
            FieldFormatter::Phone(phone) => phone.format(input),
        }
    }
}

/// 綁定了格式化規則的欄位；每次 input 事件呼叫 [`MaskedField::on_input`]
pub struct MaskedField {
    field: Arc<dyn TextField>,
    formatter: FieldFormatter,
}

impl MaskedField {
    pub fn new(field: Arc<dyn TextField>, formatter: FieldFormatter) -> Self {
        Self { field, formatter }
    }

    pub fn on_input(&self) {
        let current = self.field.value();
        let masked = self.formatter.format(&current);
        if masked != current {
            tracing::trace!("Masked '{}' -> '{}'", current, masked);
            self.field.set_value(&masked);
        }
    }
}
