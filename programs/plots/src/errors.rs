use anchor_lang::prelude::*;

#[error_code]
pub enum PlotError {
    #[msg("Field value does not fit its blueprint width")]
    FieldOverflow,

    #[msg("Grid is too small for the requested sites")]
    GridTooSmall,

    #[msg("Site size must be non-zero")]
    InvalidSiteSize,

    #[msg("Coordinate domain is smaller than the requested count")]
    CoordinateDomainTooSmall,

    #[msg("Coordinate re-roll budget exhausted")]
    CoordinateRetriesExhausted,

    #[msg("Plot size is below the configured minimum")]
    PlotTooSmall,

    #[msg("Malformed minting blob")]
    MalformedMintingBlob,

    #[msg("Token id does not match the minting blob")]
    TokenIdMismatch,

    #[msg("Unknown landmark type")]
    InvalidLandmark,

    #[msg("Tier id out of range")]
    InvalidTier,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Minting is disabled")]
    MintingDisabled,

    #[msg("Arithmetic overflow")]
    Overflow,
}
