//! The payload-carrying result.

use crate::{ Classified, Error, Fail, Outcome };
use crate::classified::FAIL_HAS_NO_VALUE ;



/// The outcome of an operation that produces a `T` on success.
///
/// The payload is stored verbatim. A payload that may legitimately be missing is
/// expressed through `T` itself, e.g. `Result<Option<User>>`.
///
/// There is deliberately no conversion from a bare `T` into a success: a missing
/// value has to surface as a missing result, not as a success wrapping nothing.
#[derive( Debug, Clone, PartialEq, Eq )]
pub enum Result<T> {
	Success( T ),
	Fail( Fail ),
}

impl<T> Result<T> {

	#[inline] pub fn success( value: T ) -> Self { Self::Success( value )}

	/// A failure holding `error`, or [`Error::Empty`] when it is missing.
	#[inline]
	pub fn fail( error: impl Into<Option<Error>> ) -> Self { Self::Fail( Fail::new( error ))}

	#[inline] pub fn fail_empty() -> Self { Self::Fail( Fail::EMPTY )}

	/// Adapts a non-generic failure into a typed one.
	///
	/// The source's error is carried over unchanged. A missing source stands for "no
	/// result was produced" and becomes a failure holding [`Error::Empty`]. Either way
	/// the returned value is a usable [`Result::Fail`].
	#[inline]
	pub fn adapt( source: Option<Fail> ) -> Self {
		Self::Fail( source.unwrap_or_default() )
	}

	/// The payload of a success.
	///
	/// # Panics
	/// Panics if called on a failure. Check [`is_success`]( Classified::is_success )
	/// first.
	#[track_caller]
	pub fn value( &self ) -> &T {
		match self {
			Self::Success( value ) => value,
			Self::Fail( _ ) => panic!( "{}", FAIL_HAS_NO_VALUE ),
		}
	}

	/// Takes the payload out of a success.
	///
	/// # Panics
	/// Panics if called on a failure.
	#[track_caller]
	pub fn into_value( self ) -> T {
		match self {
			Self::Success( value ) => value,
			Self::Fail( _ ) => panic!( "{}", FAIL_HAS_NO_VALUE ),
		}
	}

	/// The payload of a success, or `None` for a failure.
	#[inline]
	pub fn try_value( &self ) -> Option<&T> {
		match self {
			Self::Success( value ) => Some( value ),
			Self::Fail( _ ) => None,
		}
	}

	/// Forgets the payload, keeping only the classification and the error.
	pub fn into_outcome( self ) -> Outcome {
		match self {
			Self::Success( _ ) => Outcome::Success,
			Self::Fail( fail ) => Outcome::Fail( fail ),
		}
	}

}

impl<T> Classified for Result<T> {

	#[inline]
	fn is_success( &self ) -> bool { matches!( self, Self::Success( _ )) }

	#[inline]
	fn try_error( &self ) -> Option<&Error> {
		match self {
			Self::Success( _ ) => None,
			Self::Fail( fail ) => Some( fail.error() ),
		}
	}

}

impl<T> From<Result<T>> for std::result::Result<T, Error> {
	fn from( result: Result<T> ) -> Self { match result {
		Result::Success( value ) => Ok( value ),
		Result::Fail( fail ) => Err( fail.into_error() ),
	}}
}

impl<T> From<std::result::Result<T, Error>> for Result<T> {
	fn from( result: std::result::Result<T, Error> ) -> Self { match result {
		Ok( value ) => Result::Success( value ),
		Err( error ) => Result::Fail( Fail::from( error )),
	}}
}

#[cfg( test )]
mod tests {

	use super::* ;

	#[test]
	fn absent_source_adapts_to_empty() {
		let result = Result::<String>::adapt( None );
		assert!( result.is_fail() );
		assert!( result.error().is_empty() );
	}

	#[test]
	fn upcast_drops_payload() {
		assert_eq!( Result::success( 7 ).into_outcome(), Outcome::Success );
		assert_eq!(
			Result::<u8>::fail( Error::standard( "gone" )).into_outcome(),
			Outcome::fail_message( "gone" ),
		);
	}

	#[test]
	fn std_round_trip_preserves_classification() {
		let ok: std::result::Result<u8, Error> = Result::success( 3_u8 ).into();
		assert_eq!( ok, Ok( 3 ));

		let err: std::result::Result<u8, Error> = Result::<u8>::fail( None::<Error> ).into();
		assert_eq!( err, Err( Error::Empty ));

		let back: Result<u8> = std::result::Result::Err( Error::standard( "x" )).into();
		assert_eq!( back.error().message().as_deref(), Some( "x" ));
	}

}
