//! The error capability carried by every failed result.
//!
//! An [`Error`] describes *why* something failed. The set of variants is closed:
//! no error information at all, a plain human-written message, or a preserved
//! lower-level failure that was caught by the calling code.

use std::borrow::Cow ;
use std::sync::Arc ;



/// A caught lower-level failure, shared so the caller keeps access to the very
/// same object after handing it to an [`Error`].
pub type Exception = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Structured information about a failure.
///
/// The variant set is closed on purpose so that callers can match exhaustively.
/// Every variant exposes a [`message`]( Error::message ), which may be absent.
///
/// `Display` renders the message (an empty string when there is none), except for
/// [`Error::Empty`] which renders as `Empty Error`.
#[derive( thiserror::Error, Debug, Clone, Default )]
pub enum Error {
	/// No error information is available. This is what a failure normalizes to
	/// when it was built without an error.
	#[default]
	#[error( "Empty Error" )] Empty,
	/// A human-authored message, stored exactly as supplied.
	#[error( "{}", .0.as_deref().unwrap_or_default() )] Standard( Option<String> ),
	/// A caught failure object. Its `Display` text is the message; the object itself
	/// stays reachable through [`Error::exception`] and `source()`.
	#[error( "{}", .0.as_ref().map( ToString::to_string ).unwrap_or_default() )] FromException( #[source] Option<Exception> ),
}

impl Error {

	/// The error carrying no information.
	#[inline] pub const fn empty() -> Self { Self::Empty }

	/// An error holding `text` verbatim.
	#[inline]
	pub fn standard( text: impl Into<String> ) -> Self {
		Self::Standard( Some( text.into() ))
	}

	/// An error wrapping an already shared failure object. The handle is kept as is,
	/// so [`Arc::ptr_eq`] against the caller's copy holds.
	#[inline]
	pub fn from_exception( exception: Exception ) -> Self {
		Self::FromException( Some( exception ))
	}

	/// An error taking ownership of a caught failure value.
	#[inline]
	pub fn caught( error: impl std::error::Error + Send + Sync + 'static ) -> Self {
		Self::FromException( Some( Arc::new( error )))
	}

	/// The human readable message, if there is one.
	///
	/// Absent for [`Error::Empty`], for a [`Error::Standard`] built without text and
	/// for a [`Error::FromException`] built without a failure object.
	pub fn message( &self ) -> Option<Cow<'_, str>> {
		match self {
			Self::Empty => None,
			Self::Standard( text ) => text.as_deref().map( Cow::Borrowed ),
			Self::FromException( exception ) => exception.as_ref()
				.map(| exception | Cow::Owned( exception.to_string() )),
		}
	}

	/// The wrapped failure object of a [`Error::FromException`], for diagnostics or
	/// re-raising by the caller.
	pub fn exception( &self ) -> Option<&Exception> {
		match self {
			Self::FromException( exception ) => exception.as_ref(),
			Self::Empty | Self::Standard( _ ) => None,
		}
	}

	/// Whether this is the [`Error::Empty`] variant.
	#[inline] pub fn is_empty( &self ) -> bool { matches!( self, Self::Empty ) }

}

/// Wrapped failure objects compare by identity, the rest by content.
impl PartialEq for Error {
	fn eq( &self, other: &Self ) -> bool {
		match ( self, other ) {
			( Self::Empty, Self::Empty ) => true,
			( Self::Standard( lhs ), Self::Standard( rhs )) => lhs == rhs,
			( Self::FromException( lhs ), Self::FromException( rhs )) => match ( lhs, rhs ) {
				( Some( lhs ), Some( rhs )) => Arc::ptr_eq( lhs, rhs ),
				( None, None ) => true,
				_ => false,
			},
			_ => false,
		}
	}
}

impl Eq for Error {}

#[cfg( test )]
mod tests {

	use super::* ;

	#[derive( thiserror::Error, Debug )]
	#[error( "Lock Rejected" )]
	struct LockRejected ;

	#[test]
	fn display_follows_message() {
		assert_eq!( Error::standard( "disk full" ).to_string(), "disk full" );
		assert_eq!( Error::Standard( None ).to_string(), "" );
		assert_eq!( Error::caught( LockRejected ).to_string(), "Lock Rejected" );
		assert_eq!( Error::FromException( None ).to_string(), "" );
		assert_eq!( Error::Empty.to_string(), "Empty Error" );
	}

	#[test]
	fn source_is_the_wrapped_exception() {
		use std::error::Error as _ ;

		let exception: Exception = Arc::new( LockRejected );
		let error = Error::from_exception( exception.clone() );
		let source = error.source().expect( "exception should be the source" );
		assert_eq!( source.to_string(), exception.to_string() );

		assert!( Error::FromException( None ).source().is_none() );
		assert!( Error::standard( "text" ).source().is_none() );
		assert!( Error::Empty.source().is_none() );
	}

	#[test]
	fn exceptions_compare_by_identity() {
		let exception: Exception = Arc::new( LockRejected );
		let same = Error::from_exception( exception.clone() );
		assert_eq!( same, Error::from_exception( exception ));
		assert_ne!( Error::caught( LockRejected ), Error::caught( LockRejected ));
		assert_eq!( Error::FromException( None ), Error::FromException( None ));
		assert_ne!( Error::FromException( None ), Error::Empty );
		assert_ne!( Error::Standard( None ), Error::Empty );
	}

	#[test]
	fn default_is_empty() {
		assert!( Error::default().is_empty() );
		assert!( !Error::standard( "" ).is_empty() );
	}

}
