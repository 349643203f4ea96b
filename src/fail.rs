use crate::{ Error, Exception, Result };



/// The payload of a failed result: one [`Error`], never absent.
///
/// Both [`Outcome::Fail`]( crate::Outcome::Fail ) and [`Result::Fail`] carry a
/// `Fail`, which is what makes a non-generic failure adaptable into a typed one
/// for any payload type.
#[derive( Debug, Clone, Default, PartialEq, Eq )]
pub struct Fail {
	error: Error,
}

impl Fail {

	/// A failure without error information.
	pub const EMPTY: Fail = Fail { error: Error::Empty };

	/// Creates a failure. A missing error is normalized to [`Error::Empty`].
	#[inline]
	pub fn new( error: impl Into<Option<Error>> ) -> Self {
		Self { error: error.into().unwrap_or_default() }
	}

	/// Same as [`Fail::EMPTY`].
	#[inline] pub const fn empty() -> Self { Self::EMPTY }

	/// A failure holding [`Error::standard`]`( text )`.
	#[inline]
	pub fn from_message( text: impl Into<String> ) -> Self {
		Self { error: Error::standard( text )}
	}

	/// A failure holding [`Error::from_exception`]`( exception )`.
	#[inline]
	pub fn from_exception( exception: Exception ) -> Self {
		Self { error: Error::from_exception( exception )}
	}

	/// The normalized error.
	#[inline] pub fn error( &self ) -> &Error { &self.error }

	#[inline] pub fn into_error( self ) -> Error { self.error }

	/// Carries this failure over into a [`Result<T>`] for any `T`, keeping the error
	/// unchanged.
	#[inline]
	pub fn adapt<T>( self ) -> Result<T> { Result::Fail( self ) }

}

impl From<Error> for Fail {
	fn from( error: Error ) -> Self { Self { error }}
}

#[cfg( test )]
mod tests {

	use super::* ;

	#[test]
	fn missing_error_is_normalized() {
		assert_eq!( Fail::new( None::<Error> ).error(), &Error::Empty );
		assert_eq!( Fail::default(), Fail::EMPTY );
		assert_eq!( Fail::empty(), Fail::EMPTY );
	}

	#[test]
	fn given_error_is_kept() {
		let fail = Fail::new( Error::standard( "kept" ));
		assert_eq!( fail.into_error(), Error::standard( "kept" ));
		assert_eq!( Fail::from( Error::Standard( None )).error(), &Error::Standard( None ));
	}

}
