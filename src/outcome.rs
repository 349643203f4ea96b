//! The non-generic result and the construction helpers layered over it.

use crate::{ Classified, Error, Exception, Fail, Result };



static SUCCESS: Outcome = Outcome::Success ;
static FAIL: Outcome = Outcome::Fail( Fail::EMPTY );

/// The outcome of an operation that produces no payload.
///
/// Prefer the associated constructors ([`Outcome::success`], [`Outcome::fail_message`],
/// ...) over building variants by hand. The parameterless forms hand out shared
/// `'static` instances; everything else is built per call. No instance is ever
/// mutated after construction.
///
/// ```
/// use typed_outcome::{ Classified, Outcome };
///
/// fn save( free_bytes: u64 ) -> Outcome {
/// 	match free_bytes {
/// 		0 => Outcome::fail_message( "disk full" ),
/// 		_ => Outcome::success().clone(),
/// 	}
/// }
///
/// let outcome = save( 0 );
/// assert!( outcome.is_fail() );
/// assert_eq!( outcome.error().message().as_deref(), Some( "disk full" ));
/// ```
#[derive( Debug, Clone, PartialEq, Eq )]
pub enum Outcome {
	Success,
	Fail( Fail ),
}

impl Outcome {

	/// The shared success instance. Every call returns the same reference.
	#[inline] pub fn success() -> &'static Outcome { &SUCCESS }

	/// A new success carrying `value`.
	#[inline]
	pub fn success_with<T>( value: T ) -> Result<T> { Result::Success( value )}

	/// The shared failure instance holding [`Error::Empty`]. Every call returns the
	/// same reference.
	#[inline] pub fn fail() -> &'static Outcome { &FAIL }

	/// A new failure holding `error`, or [`Error::Empty`] when it is missing.
	#[inline]
	pub fn fail_with( error: impl Into<Option<Error>> ) -> Outcome {
		Outcome::Fail( Fail::new( error ))
	}

	/// A new failure holding a [`Error::Standard`] with `text`.
	#[inline]
	pub fn fail_message( text: impl Into<String> ) -> Outcome {
		Outcome::Fail( Fail::from_message( text ))
	}

	/// A new failure wrapping a caught failure object in a [`Error::FromException`].
	#[inline]
	pub fn fail_exception( exception: Exception ) -> Outcome {
		Outcome::Fail( Fail::from_exception( exception ))
	}

	/// Carries a failure over into a [`Result<T>`], keeping its error.
	///
	/// Returns `None` for a success: there is no payload to put in a
	/// `Result::Success`, so a success is never adapted.
	pub fn adapt<T>( self ) -> Option<Result<T>> {
		match self {
			Outcome::Success => None,
			Outcome::Fail( fail ) => Some( fail.adapt() ),
		}
	}

}

impl Classified for Outcome {

	#[inline]
	fn is_success( &self ) -> bool { matches!( self, Outcome::Success ) }

	#[inline]
	fn try_error( &self ) -> Option<&Error> {
		match self {
			Outcome::Success => None,
			Outcome::Fail( fail ) => Some( fail.error() ),
		}
	}

}

impl From<Fail> for Outcome {
	fn from( fail: Fail ) -> Self { Outcome::Fail( fail )}
}

#[cfg( test )]
mod tests {

	use super::* ;

	#[test]
	fn singletons_are_distinct() {
		assert!( !std::ptr::eq( Outcome::success(), Outcome::fail() ));
		assert_eq!( Outcome::fail().error(), &Error::Empty );
	}

	#[test]
	fn adapt_keeps_error() {
		let adapted = Outcome::fail_message( "bad input" ).adapt::<u8>()
			.expect( "a failure always adapts" );
		assert_eq!( adapted.error(), &Error::standard( "bad input" ));
	}

	#[test]
	fn success_does_not_adapt() {
		assert!( Outcome::success().clone().adapt::<u8>().is_none() );
	}

}
