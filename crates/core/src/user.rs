//! Account and affiliate data for the authenticated user.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FtpReply {
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountStatusReply {
    pub two_factor: bool,
}

/// Result of `/user/me`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserMeReply {
    pub user_id: String,
    pub email_address: String,
    pub credits: f64,
    pub verified: bool,
    pub affiliate: String,
    pub ftp: FtpReply,
    pub status: AccountStatusReply,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct DailyTotalReply {
    pub today: f64,
    pub total: f64,
}

/// Result of `/affiliate/stats`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateStatsReply {
    pub total_users: DailyTotalReply,
    pub total_revenue: DailyTotalReply,
}

/// The authenticated account.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub credits: f64,
    pub verified: bool,
    /// Affiliate code of the account.
    pub affiliate: String,
    pub ftp_password: String,
    pub two_factor: bool,
}

impl From<UserMeReply> for CurrentUser {
    fn from(reply: UserMeReply) -> Self {
        CurrentUser {
            id: reply.user_id,
            email: reply.email_address,
            credits: reply.credits,
            verified: reply.verified,
            affiliate: reply.affiliate,
            ftp_password: reply.ftp.password,
            two_factor: reply.status.two_factor,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct DailyTotal {
    pub today: f64,
    pub total: f64,
}

impl From<DailyTotalReply> for DailyTotal {
    fn from(reply: DailyTotalReply) -> Self {
        DailyTotal {
            today: reply.today,
            total: reply.total,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AffiliateStats {
    /// Users referred through the affiliate code.
    pub users: DailyTotal,
    pub revenue: DailyTotal,
}

impl From<AffiliateStatsReply> for AffiliateStats {
    fn from(reply: AffiliateStatsReply) -> Self {
        AffiliateStats {
            users: reply.total_users.into(),
            revenue: reply.total_revenue.into(),
        }
    }
}
