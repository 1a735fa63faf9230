use crate::error::ListError;

/// 値の列x(0)..x(n-1)とその列に対する操作からなる
///
/// 要素に空の値は入らない。要素を受け取る操作は`impl Into<Option<T>>`を取り、
/// `None`が渡されると`ListError::InvalidArgument`を返す
pub trait List<T> {
    /// リストの長さnを返す
    fn size(&self) -> usize;

    /// x(i)の値を返す
    fn get(&self, i: usize) -> Result<&T, ListError>;

    /// x(i)の値をxにし、以前の値を返す
    fn set(&mut self, i: usize, x: impl Into<Option<T>>) -> Result<T, ListError>;

    /// xをi番目として追加し、x(i)..x(n-1)を後ろにずらす
    ///
    /// i == nのときは末尾への追加になる
    fn add(&mut self, i: usize, x: impl Into<Option<T>>) -> Result<(), ListError>;

    /// x(i)を削除し、x(i+1)..x(n-1)を前にずらす
    fn remove(&mut self, i: usize) -> Result<T, ListError>;

    /// x(i) == xとなる最小のiを返す
    fn index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq;

    /// 全ての要素を削除する
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn add_first(&mut self, x: impl Into<Option<T>>) -> Result<(), ListError> {
        self.add(0, x)
    }

    fn add_last(&mut self, x: impl Into<Option<T>>) -> Result<(), ListError> {
        let n = self.size();
        self.add(n, x)
    }

    /// 最初に見つかったexistingの直後にxを追加する
    ///
    /// existingが無ければ何もせずfalseを返す
    fn add_after(&mut self, existing: &T, x: impl Into<Option<T>>) -> Result<bool, ListError>
    where
        T: PartialEq,
    {
        match self.index_of(existing) {
            Some(i) => self.add(i + 1, x).map(|_| true),
            None => Ok(false),
        }
    }

    fn remove_first(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyCollection);
        }
        self.remove(0)
    }

    fn remove_last(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyCollection);
        }
        self.remove(self.size() - 1)
    }

    /// 最初に見つかったxを削除する。無ければfalse
    fn remove_item(&mut self, x: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(x) {
            Some(i) => self.remove(i).is_ok(),
            None => false,
        }
    }

    fn first(&self) -> Result<&T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyCollection);
        }
        self.get(0)
    }

    fn last(&self) -> Result<&T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyCollection);
        }
        self.get(self.size() - 1)
    }

    fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(x).is_some()
    }
}
