use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};
use crate::errors::VotingError;

// True when the account is owned by this program and carries T's discriminator
pub fn is_program_account<T>(info: &AccountInfo) -> bool
where
    T: Owner + Discriminator,
{
    if info.owner != &T::owner() {
        return false;
    }
    match info.try_borrow_data() {
        Ok(data) => data.starts_with(T::DISCRIMINATOR),
        Err(_) => false,
    }
}

// Deserialize a program account that the handler must find already created.
// An empty, foreign-owned or differently typed account reports `missing`
// instead of Anchor's generic AccountNotInitialized / discriminator errors.
pub fn load_program_account<T>(info: &AccountInfo, missing: VotingError) -> Result<T>
where
    T: AccountDeserialize + Owner + Discriminator,
{
    if !is_program_account::<T>(info) {
        return Err(missing.into());
    }

    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

// Write a program account back, discriminator included
pub fn store_program_account<T>(info: &AccountInfo, account: &T) -> Result<()>
where
    T: AccountSerialize,
{
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    account.try_serialize(&mut writer)
}

// Create a PDA owned by this program, rent paid by `payer`.
// An address that already holds lamports is topped up, allocated and assigned
// instead, since create_account refuses funded addresses.
pub fn create_program_account<'info>(
    payer: &Signer<'info>,
    target: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    space: usize,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let required = Rent::get()?.minimum_balance(space);
    let current = target.lamports();

    if current == 0 {
        return create_account(
            CpiContext::new(
                system_program.to_account_info(),
                CreateAccount {
                    from: payer.to_account_info(),
                    to: target.clone(),
                },
            )
            .with_signer(signer_seeds),
            required,
            space as u64,
            &crate::ID,
        );
    }

    let top_up = required.saturating_sub(current);
    if top_up > 0 {
        transfer(
            CpiContext::new(
                system_program.to_account_info(),
                Transfer {
                    from: payer.to_account_info(),
                    to: target.clone(),
                },
            ),
            top_up,
        )?;
    }

    allocate(
        CpiContext::new(
            system_program.to_account_info(),
            Allocate {
                account_to_allocate: target.clone(),
            },
        )
        .with_signer(signer_seeds),
        space as u64,
    )?;

    assign(
        CpiContext::new(
            system_program.to_account_info(),
            Assign {
                account_to_assign: target.clone(),
            },
        )
        .with_signer(signer_seeds),
        &crate::ID,
    )
}
