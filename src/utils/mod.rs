//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::center::center;
pub use self::visited_set::VisitedSet;

mod ccw_face_normal;
mod center;
mod visited_set;
