use std::{
    error::Error,
    fmt::{self, Display},
};

/// Listの操作が失敗した理由
///
/// いずれも呼び出し側の契約違反を表し、失敗した操作はリストを変更しない
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// インデックスが操作の有効範囲外
    IndexOutOfRange { index: usize, size: usize },
    /// 要素として空(None)が渡された
    InvalidArgument,
    /// 要素が必要な操作を空のリストに対して行った
    EmptyCollection,
}

impl Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::IndexOutOfRange { index, size } => {
                write!(f, "ListError: Index: {index}, Size: {size}")
            }
            ListError::InvalidArgument => write!(f, "ListError: Item cannot be null."),
            ListError::EmptyCollection => write!(f, "ListError: List is empty."),
        }
    }
}

impl Error for ListError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        let e = ListError::IndexOutOfRange { index: 5, size: 3 };
        assert_eq!(e.to_string(), "ListError: Index: 5, Size: 3");
        assert_eq!(
            ListError::EmptyCollection.to_string(),
            "ListError: List is empty."
        );

        let boxed: Box<dyn Error> = Box::new(ListError::InvalidArgument);
        assert_eq!(boxed.to_string(), "ListError: Item cannot be null.");
    }
}
