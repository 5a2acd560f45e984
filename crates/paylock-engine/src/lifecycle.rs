//! # Contract Lifecycle Transitions
//!
//! The five state-transition operations of the escrow engine. Each one
//! validates the caller's role and the contract's status, then either
//! mutates the ledger or returns a structured error with no state
//! change. Only the two terminal transitions (`claim_payment`,
//! `resolve_dispute`) move funds; every other transition is a pure
//! state change.
//!
//! ## Guard Order
//!
//! Guard evaluation order is observable behavior (callers assert on the
//! error cause) and is fixed:
//!
//! - `start_contract`: pause → amount → ledger pull
//! - `initiate_complete`: role → status
//! - `claim_payment`: status → role → time gate
//! - `start_dispute`: party membership → status/role matrix
//! - `resolve_dispute`: status → resolver authorization → split bound
//!
//! ## Atomicity
//!
//! Fund-moving transitions validate every guard and the custody balance
//! before the first transfer, and advance the status only after the last
//! transfer succeeds. Against a ledger that applies each transfer
//! atomically, the operation is all-or-nothing from the caller's
//! perspective.

use paylock_core::{AccountId, TermsHash, Timestamp, TokenAmount};
use paylock_token::TokenError;

use crate::contract::{Contract, ContractNo, ContractStatus};
use crate::error::EscrowError;
use crate::registry::EscrowRegistry;
use crate::settlement;

impl EscrowRegistry {
    /// Open a new escrow contract, pulling `amount` from the caller into
    /// custody.
    ///
    /// The caller becomes the contract's client and must have approved
    /// the custody account for at least `amount` beforehand. On success
    /// the contract starts in [`ContractStatus::Started`] with the
    /// current fee rate frozen into its record, and the new number is
    /// appended to both parties' indices.
    ///
    /// # Errors
    ///
    /// Returns [`EscrowError::Paused`] while creation is globally
    /// disabled, [`EscrowError::AmountTooLow`] for amounts below the
    /// configured minimum, and [`EscrowError::InsufficientAllowance`]
    /// when the ledger refuses the custody pull.
    pub fn start_contract(
        &mut self,
        caller: &AccountId,
        freelancer: AccountId,
        terms_hash: TermsHash,
        amount: TokenAmount,
    ) -> Result<ContractNo, EscrowError> {
        if !self.config.new_contracts_allowed {
            return Err(EscrowError::Paused);
        }
        if amount < self.config.min_contract_amount {
            return Err(EscrowError::AmountTooLow {
                amount,
                minimum: self.config.min_contract_amount,
            });
        }
        self.token
            .transfer_from(caller, &self.custody_account, &self.custody_account, amount)
            .map_err(EscrowError::InsufficientAllowance)?;

        let contract_no = self.current_no.next();
        self.current_no = contract_no;
        self.by_client.entry(*caller).or_default().push(contract_no);
        self.by_freelancer
            .entry(freelancer)
            .or_default()
            .push(contract_no);
        self.contracts.insert(
            contract_no,
            Contract {
                contract_no,
                client: *caller,
                freelancer,
                terms_hash,
                amount,
                fee_bps: self.config.fee,
                status: ContractStatus::Started,
                start_time: Timestamp::now(),
            },
        );
        tracing::info!(%contract_no, %amount, "escrow contract started");
        Ok(contract_no)
    }

    /// Initiate completion: the client signs off on the work and starts
    /// the claim hold interval.
    ///
    /// Resets the contract's `start_time` to now — the hold gate counts
    /// from this event, not from creation.
    ///
    /// # Errors
    ///
    /// Returns [`EscrowError::NotClient`] for any caller other than the
    /// contract's client, and [`EscrowError::NotAvailableForClosing`]
    /// unless the contract is [`ContractStatus::Started`].
    pub fn initiate_complete(
        &mut self,
        caller: &AccountId,
        contract_no: ContractNo,
    ) -> Result<(), EscrowError> {
        let contract = self
            .contracts
            .get_mut(&contract_no)
            .ok_or(EscrowError::UnknownContract { contract_no })?;
        if contract.client != *caller {
            return Err(EscrowError::NotClient { contract_no });
        }
        if contract.status != ContractStatus::Started {
            return Err(EscrowError::NotAvailableForClosing {
                status: contract.status,
            });
        }
        contract.status = ContractStatus::CompleteInitiated;
        contract.start_time = Timestamp::now();
        tracing::info!(%contract_no, "completion initiated; hold interval running");
        Ok(())
    }

    /// Claim the payment: the freelancer collects once the hold interval
    /// has elapsed since completion-initiation.
    ///
    /// Pays `floor(amount * fee_bps / 10000)` to the dev wallet and the
    /// remainder to the freelancer, using the fee rate frozen at
    /// creation, then marks the contract [`ContractStatus::Completed`].
    ///
    /// # Errors
    ///
    /// Returns [`EscrowError::NotAvailableForClaim`] unless completion
    /// was initiated, [`EscrowError::NotFreelancer`] for any caller
    /// other than the contract's freelancer, and [`EscrowError::TooEarly`]
    /// while the hold interval is still running.
    pub fn claim_payment(
        &mut self,
        caller: &AccountId,
        contract_no: ContractNo,
    ) -> Result<(), EscrowError> {
        let contract = self
            .contracts
            .get(&contract_no)
            .ok_or(EscrowError::UnknownContract { contract_no })?;
        let (status, freelancer, amount, fee_bps, start_time) = (
            contract.status,
            contract.freelancer,
            contract.amount,
            contract.fee_bps,
            contract.start_time,
        );

        if status != ContractStatus::CompleteInitiated {
            return Err(EscrowError::NotAvailableForClaim { status });
        }
        if freelancer != *caller {
            return Err(EscrowError::NotFreelancer { contract_no });
        }
        let elapsed = Timestamp::now().seconds_since(&start_time);
        let hold = i64::try_from(self.config.hold_interval_secs).unwrap_or(i64::MAX);
        if elapsed < hold {
            return Err(EscrowError::TooEarly {
                remaining_secs: u64::try_from(hold - elapsed).unwrap_or(u64::MAX),
            });
        }

        let split = settlement::claim_split(amount, fee_bps);
        self.pay_out(
            amount,
            &[
                (self.config.dev_wallet, split.fee),
                (freelancer, split.freelancer),
            ],
        )?;

        self.set_status(contract_no, ContractStatus::Completed);
        tracing::info!(
            %contract_no,
            fee = %split.fee,
            freelancer_share = %split.freelancer,
            "payment claimed"
        );
        Ok(())
    }

    /// Open a dispute on a contract.
    ///
    /// While [`ContractStatus::Started`], either party may dispute.
    /// While [`ContractStatus::CompleteInitiated`], only the client may —
    /// the freelancer cannot re-open a contract the client has already
    /// agreed to close. Every other status rejects.
    ///
    /// # Errors
    ///
    /// Returns [`EscrowError::NotAllowed`] for non-parties and
    /// [`EscrowError::CannotDispute`] when the status/role matrix
    /// forbids it.
    pub fn start_dispute(
        &mut self,
        caller: &AccountId,
        contract_no: ContractNo,
    ) -> Result<(), EscrowError> {
        let contract = self
            .contracts
            .get_mut(&contract_no)
            .ok_or(EscrowError::UnknownContract { contract_no })?;
        if !contract.is_party(caller) {
            return Err(EscrowError::NotAllowed { contract_no });
        }
        let allowed = match contract.status {
            ContractStatus::Started => true,
            ContractStatus::CompleteInitiated => contract.client == *caller,
            _ => false,
        };
        if !allowed {
            return Err(EscrowError::CannotDispute {
                status: contract.status,
            });
        }
        contract.status = ContractStatus::InDispute;
        tracing::info!(%contract_no, "dispute opened");
        Ok(())
    }

    /// Resolve a dispute with a fund split chosen by an authorized
    /// resolver.
    ///
    /// The frozen fee is extracted even on dispute resolution; the
    /// resolver's `freelancer_amount` plus the fee must fit within the
    /// contract amount, and whatever remains (including the fee
    /// division's truncation remainder) refunds the client. Marks the
    /// contract [`ContractStatus::DisputeResolved`].
    ///
    /// # Errors
    ///
    /// Returns [`EscrowError::NotInDispute`] unless the contract is
    /// disputed, [`EscrowError::NotResolver`] for unauthorized callers,
    /// and [`EscrowError::FreelancerAmountTooMuch`] when the requested
    /// split exceeds what remains after the fee.
    pub fn resolve_dispute(
        &mut self,
        caller: &AccountId,
        contract_no: ContractNo,
        freelancer_amount: TokenAmount,
    ) -> Result<(), EscrowError> {
        let contract = self
            .contracts
            .get(&contract_no)
            .ok_or(EscrowError::UnknownContract { contract_no })?;
        let (status, client, freelancer, amount, fee_bps) = (
            contract.status,
            contract.client,
            contract.freelancer,
            contract.amount,
            contract.fee_bps,
        );

        if status != ContractStatus::InDispute {
            return Err(EscrowError::NotInDispute { status });
        }
        if !self.resolvers.contains(caller) {
            return Err(EscrowError::NotResolver);
        }

        let split = settlement::dispute_split(amount, fee_bps, freelancer_amount)?;
        self.pay_out(
            amount,
            &[
                (self.config.dev_wallet, split.fee),
                (freelancer, split.freelancer),
                (client, split.client_refund),
            ],
        )?;

        self.set_status(contract_no, ContractStatus::DisputeResolved);
        tracing::info!(
            %contract_no,
            fee = %split.fee,
            freelancer_share = %split.freelancer,
            client_refund = %split.client_refund,
            "dispute resolved"
        );
        Ok(())
    }

    /// Execute a settlement: verify custody covers the contract amount,
    /// then push every payout from the custody account.
    fn pay_out(
        &self,
        total: TokenAmount,
        payouts: &[(AccountId, TokenAmount)],
    ) -> Result<(), EscrowError> {
        let custody_balance = self.token.balance_of(&self.custody_account);
        if custody_balance < total {
            tracing::warn!(
                %custody_balance,
                %total,
                "custody balance below settlement total"
            );
            return Err(EscrowError::Token(TokenError::InsufficientBalance {
                account: self.custody_account,
                requested: total,
                available: custody_balance,
            }));
        }
        for (recipient, amount) in payouts {
            self.token
                .transfer(&self.custody_account, recipient, *amount)
                .map_err(EscrowError::Token)?;
        }
        Ok(())
    }

    fn set_status(&mut self, contract_no: ContractNo, status: ContractStatus) {
        if let Some(contract) = self.contracts.get_mut(&contract_no) {
            contract.status = status;
        }
    }
}
