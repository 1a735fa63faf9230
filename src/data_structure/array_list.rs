use std::fmt::{self, Debug, Display};

use log::{debug, trace};

use crate::error::ListError;
use crate::interface::list::List;

/// 容量を指定しなかったときの配列の長さ
pub const DEFAULT_CAPACITY: usize = 10;

/// 配列を使ったListインタフェースの実装
///
/// get(i), set(i,x)の実行時間はO(1)
/// add(i,x), remove(i)の実行時間はresize()のコストを無視するとO(1 + n - i)
/// 空のArrayListに対して任意のm個のadd(i,x)を実行したとき、resizeにかかる時間はO(m)
///
/// 配列は伸びるだけで縮まない
pub struct ArrayList<T> {
    a: Box<[Option<T>]>, // a[0..n]は全てSome、a[n..]は全てNone
    n: usize,            // リストの要素数
}

fn empty_slots<T>(len: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(len).collect()
}

impl<T> ArrayList<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// 長さcapの配列で始める。capが0でも最初のaddでDEFAULT_CAPACITYまで伸びる
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            a: empty_slots(cap),
            n: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.a.len()
    }

    /// 要素を先頭から順に返す
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.a[..self.n].iter().flatten()
    }

    fn out_of_range(&self, i: usize) -> ListError {
        ListError::IndexOutOfRange {
            index: i,
            size: self.n,
        }
    }

    // 配列の長さを2倍(少なくともDEFAULT_CAPACITY)にする
    fn resize(&mut self) {
        let old = self.a.len();
        let cap = std::cmp::max(DEFAULT_CAPACITY, 2 * old);
        let mut b = empty_slots(cap);
        for (dst, src) in b.iter_mut().zip(self.a[..self.n].iter_mut()) {
            *dst = src.take();
        }
        self.a = b;
        debug!("ArrayList grew from {old} to {cap} slots with {} live", self.n);
    }

    // 検査済みのi <= nにxを入れる
    fn insert(&mut self, i: usize, x: T) {
        if self.n == self.a.len() {
            self.resize();
        }
        // a[n]はNoneなので、a[i..=n]を右に回すとa[i]が空く
        self.a[i..=self.n].rotate_right(1);
        self.a[i] = Some(x);
        self.n += 1;
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> for ArrayList<T> {
    fn size(&self) -> usize {
        self.n
    }

    fn get(&self, i: usize) -> Result<&T, ListError> {
        self.a[..self.n]
            .get(i)
            .and_then(Option::as_ref)
            .ok_or_else(|| self.out_of_range(i))
    }

    fn set(&mut self, i: usize, x: impl Into<Option<T>>) -> Result<T, ListError> {
        let err = self.out_of_range(i);
        let n = self.n;
        let slot = self.a[..n].get_mut(i).ok_or_else(|| err.clone())?;
        let x = x.into().ok_or(ListError::InvalidArgument)?;
        slot.replace(x).ok_or(err)
    }

    fn add(&mut self, i: usize, x: impl Into<Option<T>>) -> Result<(), ListError> {
        if i > self.n {
            return Err(self.out_of_range(i));
        }
        let x = x.into().ok_or(ListError::InvalidArgument)?;
        self.insert(i, x);
        Ok(())
    }

    fn remove(&mut self, i: usize) -> Result<T, ListError> {
        let err = self.out_of_range(i);
        let n = self.n;
        let x = self.a[..n].get_mut(i).and_then(Option::take).ok_or(err)?;
        // 空いたa[i]をa[n-1]まで送る
        self.a[i..n].rotate_left(1);
        self.n -= 1;
        Ok(x)
    }

    fn index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.a[..self.n]
            .iter()
            .position(|slot| slot.as_ref() == Some(x))
    }

    fn clear(&mut self) {
        for slot in self.a[..self.n].iter_mut() {
            *slot = None;
        }
        trace!("ArrayList cleared {} elements", self.n);
        self.n = 0;
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        Self {
            a: self.a.clone(),
            n: self.n,
        }
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(self.n, x);
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Option<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.a[..self.n].iter().flatten()
    }
}

impl<T: Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// `ArrayList[Size=3, Capacity=10, Contents=[a, b, c]]`
impl<T: Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayList[Size={}, Capacity={}, Contents=[", self.n, self.a.len())?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]]")
    }
}
