//! Project Context
//!
//! Static description of the platform, embedded by handlers that reason
//! about the system as a whole (coordination, architecture, compliance).

pub const PROJECT_DESCRIPTION: &str = "\
Tributa.AI is a tax-credit recovery and tokenization platform for Brazilian companies.
- Frontend: React 18 + TypeScript + Vite, Tailwind CSS, shadcn/ui components
- Features: KYC onboarding wizard, risk and compliance dashboards, tax-credit marketplace \
with auctions, blockchain explorer, digital cession contracts
- Integrations: ERC20 tokenization contracts, notary registries, ICP-Brasil certificates, \
chat-completion models for task automation
- Regulatory context: Brazilian tax law (CTN, RFB normative instructions), CVM rules for \
tokenized assets, KYC/AML, LGPD";
