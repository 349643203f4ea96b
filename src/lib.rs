//! Explicit success/failure values.
//!
//! Operations return a value that is either a success, optionally carrying a payload,
//! or a failure carrying structured error information. Callers have to classify the
//! value before they may read the payload or the error; reading the wrong one is a
//! bug and panics immediately instead of handing back a default.
//!
//! # Core Concepts
//!
//! - [`Error`]: Why something failed. A closed set of three variants:
//! 	- [`Error::Empty`] - no information at all
//! 	- [`Error::Standard`] - a human-written message
//! 	- [`Error::FromException`] - a caught lower-level failure, kept as an [`Exception`]
//!
//! - [`Outcome`]: The result of an operation without a payload, either
//! 	`Outcome::Success` or `Outcome::Fail`. Its associated functions are the
//! 	preferred way of building results.
//!
//! - [`Result<T>`]: The result of an operation producing a `T`, either
//! 	`Result::Success( T )` or `Result::Fail`.
//!
//! - [`Fail`]: The payload of a failure, shared by both result types. It always holds
//! 	an [`Error`]; a missing error is normalized to [`Error::Empty`].
//!
//! - [`Classified`]: The sealed contract both result types implement, so code can
//! 	handle results of any payload type through `&dyn Classified`.
//!
//! # Example
//!
//! ```
//! use typed_outcome::{ Classified, Error, Outcome, Result };
//!
//! #[derive( Debug, PartialEq )]
//! struct User { name: String }
//!
//! fn find_user( name: &str ) -> Result<User> {
//! 	match name.is_empty() {
//! 		true => Result::fail( Error::standard( "bad input" )),
//! 		false => Outcome::success_with( User { name: name.to_string() }),
//! 	}
//! }
//!
//! let found = find_user( "ada" );
//! assert!( found.is_success() );
//! assert_eq!( found.value().name, "ada" );
//!
//! let missing = find_user( "" );
//! assert!( missing.is_fail() );
//! assert_eq!( missing.error().message().as_deref(), Some( "bad input" ));
//! ```
//!
//! # Caught Failures
//!
//! Lower-level failures are wrapped rather than flattened into text, so the caller
//! keeps the original object for inspection or re-raising.
//!
//! ```
//! use std::sync::Arc ;
//! use typed_outcome::{ Classified, Exception, Outcome };
//!
//! let exception: Exception = Arc::new( std::io::Error::new( std::io::ErrorKind::TimedOut, "timeout" ));
//! let outcome = Outcome::fail_exception( exception.clone() );
//!
//! let error = outcome.error();
//! assert_eq!( error.message().as_deref(), Some( "timeout" ));
//! assert!( Arc::ptr_eq( error.exception().unwrap(), &exception ));
//! ```
//!
//! # Adapting Failures
//!
//! A failure without a payload type can be carried over into a [`Result<T>`] of any
//! `T`. This conversion is explicit, and it only exists for failures: a payload-less
//! success has nothing to offer as a `T`.
//!
//! ```
//! use typed_outcome::{ Classified, Fail, Outcome, Result };
//!
//! fn validate( input: &str ) -> Option<Fail> {
//! 	input.is_empty().then(|| Fail::from_message( "bad input" ))
//! }
//!
//! if let Some( fail ) = validate( "" ) {
//! 	let result: Result<u32> = fail.adapt();
//! 	assert_eq!( result.error().message().as_deref(), Some( "bad input" ));
//! }
//!
//! // A missing source still adapts into a usable failure.
//! assert!( Result::<u32>::adapt( None ).error().is_empty() );
//!
//! // Successes do not adapt.
//! assert!( Outcome::success().clone().adapt::<u32>().is_none() );
//! ```
//!
//! # Contract Violations
//!
//! Reading the error of a success, or the value of a failure, panics:
//!
//! ```should_panic
//! use typed_outcome::{ Classified, Outcome };
//!
//! let _ = Outcome::success().error();
//! ```

mod error ;
mod fail ;
mod classified ;
mod outcome ;
mod result ;

pub use error::{ Error, Exception };
pub use fail::Fail ;
pub use classified::Classified ;
pub use outcome::Outcome ;
pub use result::Result ;
