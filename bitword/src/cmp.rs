use std::cmp::Ordering;
use crate::BitWord;

impl BitWord {

  /// Compare the unsigned values of two words of the same size.
  /// Words of different sizes are not comparable.
  pub fn compare(&self, other: &BitWord) -> Option<Ordering> {
    if self.bits() != other.bits() { return None }
    for (&lhs,&rhs) in self.as_slice().iter().rev()
                 .zip(other.as_slice().iter().rev()) {
      if lhs == rhs { continue }
      return Some(if lhs < rhs { Ordering::Less } else { Ordering::Greater })
    }
    Some(Ordering::Equal)
  }

}

impl PartialOrd for BitWord {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    self.compare(other)
  }
}
