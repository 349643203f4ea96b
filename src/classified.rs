//! The classification contract shared by [`Outcome`]( crate::Outcome ) and
//! [`Result`]( crate::Result ).
//!
//! Code that only cares whether something succeeded, and why it failed if it did,
//! can take `&dyn Classified` (or `impl Classified`) and handle results of any
//! payload type uniformly.

use crate::Error ;



pub(crate) const SUCCESS_HAS_NO_ERROR: &str = "Result is Success. It does not have an Error.";
pub(crate) const FAIL_HAS_NO_VALUE: &str = "Result is Fail. It does not have a Value.";

mod sealed {
	pub trait Sealed {}
	impl Sealed for crate::Outcome {}
	impl<T> Sealed for crate::Result<T> {}
}

/// Success/failure classification of a result value.
///
/// This trait is sealed: the only implementors are [`Outcome`]( crate::Outcome )
/// and [`Result<T>`]( crate::Result ).
pub trait Classified: sealed::Sealed {

	/// Whether this is a success. Constant for the lifetime of the value.
	fn is_success( &self ) -> bool ;

	/// Whether this is a failure. Always the negation of [`is_success`]( Classified::is_success ).
	#[inline] fn is_fail( &self ) -> bool { !self.is_success() }

	/// The error of a failure, or `None` for a success.
	fn try_error( &self ) -> Option<&Error> ;

	/// The error of a failure.
	///
	/// # Panics
	/// Panics if called on a success. Check [`is_fail`]( Classified::is_fail ) first;
	/// a success carrying no error is a caller bug, not a modeled failure.
	#[track_caller]
	fn error( &self ) -> &Error {
		match self.try_error() {
			Some( error ) => error,
			None => panic!( "{}", SUCCESS_HAS_NO_ERROR ),
		}
	}

}
